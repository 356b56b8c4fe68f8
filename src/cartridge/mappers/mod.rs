// Mappers module - cartridge mapper implementations
//
// Only mapper 0 (NROM) is implemented; it is the simplest mapper and is
// sufficient to exercise the PPU's CHR-read/write and mirroring interface in
// tests and benchmarks. Bank-switching mappers are a cartridge/CPU-core
// concern outside this crate's scope.

mod mapper0;

use super::{Cartridge, Mapper};
pub use mapper0::Mapper0;

/// Error type for mapper creation.
#[derive(Debug)]
pub enum MapperError {
    /// The requested mapper number is not supported.
    UnsupportedMapper(u8),
}

impl std::fmt::Display for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapperError::UnsupportedMapper(num) => {
                write!(f, "mapper {} is not supported", num)
            }
        }
    }
}

impl std::error::Error for MapperError {}

/// Create a mapper instance for the cartridge's mapper number.
///
/// # Errors
/// Returns `MapperError::UnsupportedMapper` for any mapper number other than 0.
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, MapperError> {
    match cartridge.mapper {
        0 => Ok(Box::new(Mapper0::new(cartridge))),
        mapper_num => Err(MapperError::UnsupportedMapper(mapper_num)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Mirroring;

    #[test]
    fn test_mapper0_creation() {
        let cartridge = Cartridge {
            prg_rom: vec![0xAA; 16 * 1024],
            chr_rom: vec![0xBB; 8 * 1024],
            trainer: None,
            mapper: 0,
            mirroring: Mirroring::Horizontal,
            has_battery: false,
        };

        let result = create_mapper(cartridge);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().mirroring(), Mirroring::Horizontal);
    }

    #[test]
    fn test_unsupported_mapper() {
        let cartridge = Cartridge {
            prg_rom: vec![0xAA; 16 * 1024],
            chr_rom: vec![0xBB; 8 * 1024],
            trainer: None,
            mapper: 99,
            mirroring: Mirroring::Horizontal,
            has_battery: false,
        };

        let result = create_mapper(cartridge);
        assert!(matches!(result, Err(MapperError::UnsupportedMapper(99))));
    }
}
