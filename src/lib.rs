// NES PPU core library.
//
// Implements the 2C02 Picture Processing Unit: the cycle-driven clock,
// scroll-register arithmetic, background fetch pipeline, sprite evaluation,
// pixel composition and the CPU-visible register bus. The CPU, mapper bank
// switching, controller input, audio and windowing are external
// collaborators and out of scope here; `cartridge` exposes only the narrow
// `Mapper` interface the PPU needs for CHR access and mirroring.

pub mod cartridge;
pub mod ppu;

pub use cartridge::{Cartridge, Mapper, Mirroring};
pub use ppu::{Ppu, PpuError};
