// PPU module - Picture Processing Unit (2C02) core.
//
// Cycle-driven: one `step()` call advances exactly one dot. The dataflow per
// dot is tick -> phase classify -> (fetch | sprite eval | pixel render |
// scroll copy) -> framebuffer, dispatched as a flat match on (scanline, dot)
// rather than any recursive or monadic pipeline.

mod constants;
mod error;
mod fetch;
mod memory;
mod palette;
mod registers;
mod scroll;
mod sprites;
mod pixel;

use std::cell::RefCell;
use std::rc::Rc;

use crate::cartridge::{Mapper, Mirroring};
use sprites::Sprite;

pub use error::PpuError;

const FRAMEBUFFER_SIZE: usize = constants::SCREEN_WIDTH * constants::SCREEN_HEIGHT * 3;

/// The NES Picture Processing Unit core.
pub struct Ppu {
    // Timing state.
    dot: u16,
    scanline: u16,
    frame: u64,

    // Loopy scroll/address latches.
    v: u16,
    t: u16,
    x: u8,
    w: bool,

    // $2000 control.
    nmi_enable: bool,
    vram_increment_32: bool,
    sprite_pattern_base: u16,
    bg_pattern_base: u16,
    sprite_size_16: bool,

    // $2001 mask.
    mask_grayscale: bool,
    mask_show_bg_left: bool,
    mask_show_sprites_left: bool,
    mask_show_bg: bool,
    mask_show_sprites: bool,
    mask_emphasize_red: bool,
    mask_emphasize_green: bool,
    mask_emphasize_blue: bool,

    // $2002 status.
    vblank: bool,
    sprite0_hit: bool,
    sprite_overflow: bool,

    // OAM.
    oam: [u8; 256],
    oam_addr: u8,

    // PPU-owned memories.
    nametables: [u8; 2048],
    palette_ram: [u8; 32],
    framebuffer: Vec<u8>,

    // Background fetch pipeline.
    nt_byte: u8,
    at_byte: u8,
    lo_tile: u8,
    hi_tile: u8,
    tile_data: u64,

    // Current scanline's decoded sprites, in OAM order.
    sprites: Vec<Sprite>,

    // $2007 buffered read latch.
    data_buffer: u8,

    // NMI line to the CPU; consumed (and cleared) by `take_nmi`.
    nmi_pending: bool,

    mapper: Option<Rc<RefCell<Box<dyn Mapper>>>>,
    mirroring: Mirroring,
}

impl Ppu {
    pub fn new() -> Self {
        Ppu {
            dot: 0,
            scanline: 0,
            frame: 0,

            v: 0,
            t: 0,
            x: 0,
            w: false,

            nmi_enable: false,
            vram_increment_32: false,
            sprite_pattern_base: 0,
            bg_pattern_base: 0,
            sprite_size_16: false,

            mask_grayscale: false,
            mask_show_bg_left: false,
            mask_show_sprites_left: false,
            mask_show_bg: false,
            mask_show_sprites: false,
            mask_emphasize_red: false,
            mask_emphasize_green: false,
            mask_emphasize_blue: false,

            vblank: false,
            sprite0_hit: false,
            sprite_overflow: false,

            oam: [0; 256],
            oam_addr: 0,

            nametables: [0; 2048],
            palette_ram: [0; 32],
            framebuffer: vec![0; FRAMEBUFFER_SIZE],

            nt_byte: 0,
            at_byte: 0,
            lo_tile: 0,
            hi_tile: 0,
            tile_data: 0,

            sprites: Vec::with_capacity(8),

            data_buffer: 0,
            nmi_pending: false,

            mapper: None,
            mirroring: Mirroring::Horizontal,
        }
    }

    /// Reset to the power-on-adjacent state: mid pre-render area, VBlank
    /// clear, frame counter zeroed, framebuffer filled with `$FF`.
    pub fn reset(&mut self) {
        self.dot = constants::CYCLES_PER_SCANLINE - 1;
        self.scanline = constants::POSTRENDER_SCANLINE;
        self.frame = 0;

        self.v = 0;
        self.t = 0;
        self.x = 0;
        self.w = false;

        self.vblank = false;
        self.sprite0_hit = false;
        self.sprite_overflow = false;

        self.nt_byte = 0;
        self.at_byte = 0;
        self.lo_tile = 0;
        self.hi_tile = 0;
        self.tile_data = 0;

        self.sprites.clear();
        self.data_buffer = 0;
        self.nmi_pending = false;

        self.framebuffer.iter_mut().for_each(|b| *b = 0xFF);
    }

    pub fn set_mirroring(&mut self, mirroring: Mirroring) {
        self.mirroring = mirroring;
    }

    pub fn set_mapper(&mut self, mapper: Rc<RefCell<Box<dyn Mapper>>>) {
        self.mirroring = mapper.borrow().mirroring();
        self.mapper = Some(mapper);
    }

    /// Advance the PPU by exactly one dot, running the phase classifier
    /// against the post-advance `(scanline, dot)`.
    pub fn step(&mut self) {
        self.tick();
        self.handle_phase();
    }

    fn tick(&mut self) {
        self.dot += 1;
        if self.dot >= constants::CYCLES_PER_SCANLINE {
            self.dot = 0;
            self.scanline += 1;
            if self.scanline > constants::PRERENDER_SCANLINE {
                self.scanline = 0;
                self.frame += 1;
            }
        }
        debug_assert!(
            self.dot < constants::CYCLES_PER_SCANLINE,
            "{}",
            PpuError::InvariantViolation("dot exceeded cycles-per-scanline after tick")
        );
        debug_assert!(
            self.scanline <= constants::PRERENDER_SCANLINE,
            "{}",
            PpuError::InvariantViolation("scanline exceeded scanlines-per-frame after tick")
        );
    }

    fn handle_phase(&mut self) {
        let s = self.scanline;
        let d = self.dot;

        let pre_line = s == constants::PRERENDER_SCANLINE;
        let visible_line = s <= constants::LAST_VISIBLE_SCANLINE;
        let render_line = pre_line || visible_line;
        let visible_dot = (1..=256).contains(&d);
        let pre_fetch_dot = (321..=336).contains(&d);
        let fetch_dot = visible_dot || pre_fetch_dot;
        let rendering = self.mask_show_bg || self.mask_show_sprites;

        if rendering {
            if visible_line && visible_dot {
                self.render_pixel(d - 1, s);
            }
            if render_line && fetch_dot {
                self.background_fetch_step(d);
            }
            if pre_line && (280..=304).contains(&d) {
                self.copy_y();
            }
            if (pre_line || visible_line) && (pre_fetch_dot || visible_dot) && d % 8 == 0 {
                self.increment_x();
            }
            if (pre_line || visible_line) && d == 256 {
                self.increment_y();
            }
            if (pre_line || visible_line) && d == 257 {
                self.copy_x();
            }
            if visible_line && d == 257 {
                self.evaluate_sprites_for_scanline(s);
            }
        }

        if s == constants::FIRST_VBLANK_SCANLINE && d == 1 {
            self.vblank = true;
            if self.nmi_enable {
                self.nmi_pending = true;
            }
        }
        if pre_line && d == 1 {
            self.vblank = false;
            self.sprite0_hit = false;
            self.sprite_overflow = false;
        }
    }

    /// Whether background or sprite rendering is currently enabled.
    pub fn is_rendering_enabled(&self) -> bool {
        self.mask_show_bg || self.mask_show_sprites
    }

    /// Consume the pending NMI line assertion, clearing it.
    pub fn take_nmi(&mut self) -> bool {
        std::mem::take(&mut self.nmi_pending)
    }

    /// Peek at the NMI line without consuming it.
    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    /// Current VBlank flag state (bit 7 of $2002), without the read
    /// side effects a CPU-visible `cpu_read` would trigger.
    pub fn vblank(&self) -> bool {
        self.vblank
    }

    pub fn scanline(&self) -> u16 {
        self.scanline
    }

    pub fn dot(&self) -> u16 {
        self.dot
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn framebuffer(&self) -> &[u8] {
        &self.framebuffer
    }
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
