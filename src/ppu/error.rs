// PPU error taxonomy: out-of-range bus access and invariant violations are
// both fatal logic errors (see the error handling design notes). Register
// reads/writes never produce one since addresses are masked before dispatch;
// `memory.rs` and `tick()` construct these via `debug_assert!` on the
// internal access and odometer paths, where they should be unreachable in
// correct operation.

use std::fmt;

/// Fatal PPU logic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpuError {
    /// An address reached internal memory access outside `$0000-$3FFF`.
    OutOfRange { addr: u16 },
    /// A structural invariant (dot/scanline range, sprite slot length) was
    /// violated.
    InvariantViolation(&'static str),
}

impl fmt::Display for PpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PpuError::OutOfRange { addr } => {
                write!(f, "PPU address {:#06X} is out of range", addr)
            }
            PpuError::InvariantViolation(msg) => {
                write!(f, "PPU invariant violated: {}", msg)
            }
        }
    }
}

impl std::error::Error for PpuError {}
