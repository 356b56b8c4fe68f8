// Scenario-level tests exercising the testable properties in the PPU spec:
// timing odometer, reset state, VBlank/NMI edges, palette/nametable memory
// behavior, and the documented hardware-vs-source-bug resolutions. Per-module
// unit tests for scroll/fetch/sprites/pixel/registers live alongside their
// implementations.

mod memory;
mod timing;

use std::cell::RefCell;
use std::rc::Rc;

use crate::cartridge::mappers::Mapper0;
use crate::cartridge::{Cartridge, Mapper, Mirroring};
use crate::ppu::Ppu;

pub(super) fn ppu_with_chr_ram() -> Ppu {
    let cartridge = Cartridge {
        prg_rom: vec![0; 16 * 1024],
        chr_rom: vec![0; 8 * 1024],
        trainer: None,
        mapper: 0,
        mirroring: Mirroring::Horizontal,
        has_battery: false,
    };
    let mapper: Rc<RefCell<Box<dyn Mapper>>> = Rc::new(RefCell::new(Box::new(Mapper0::new(cartridge))));

    let mut ppu = Ppu::new();
    ppu.set_mapper(mapper);
    ppu
}
