//! Simulated C64 for running HAL code off hardware
//!
//! [`Machine`] is a flat 64 KiB register file with the few VIC-II behaviours
//! the HAL depends on:
//!
//! - the raster counter advances one line per read of
//!   [`SCREEN_RASTER_LINE`](crate::vic::regs::SCREEN_RASTER_LINE), so a
//!   raster spin always terminates;
//! - when the last PAL line wraps to 0 a frame has been "displayed" and a
//!   pixel-exact sprite-sprite collision scan is ORed into the latch;
//! - reading [`SPRITE_COLLISIONS`](crate::vic::regs::SPRITE_COLLISIONS)
//!   returns the latch and clears it.
//!
//! Sprite data is fetched from VIC bank 0. Only the low eight bits of sprite
//! x positions exist here.

use core::fmt;

use crate::bits::test_bit;
use crate::bus::Bus;
use crate::input::{Joystick, Port};
use crate::sprite::{BYTES_PER_LINE, SPRITE_ALIGNMENT, SPRITE_LINES};
use crate::vic::regs::*;
use crate::vic::{MAX_SPRITES, SCREEN_COLUMNS, SCREEN_ROWS};

/// Bytes of address space
pub const MEMORY_SIZE: usize = 0x10000;
/// Raster lines per PAL frame
pub const PAL_RASTER_LINES: u16 = 312;

/// Tallest sprite after vertical expansion
const MAX_SPRITE_HEIGHT: usize = SPRITE_LINES * 2;

/// Host-side stand-in for the machine
pub struct Machine {
    memory: [u8; MEMORY_SIZE],
    raster: u16,
    frames: u64,
    collisions: u8,
}

impl Machine {
    /// Power-on state: zeroed memory, joysticks released, raster at line 0
    pub fn new() -> Self {
        let mut machine = Machine {
            memory: [0; MEMORY_SIZE],
            raster: 0,
            frames: 0,
            collisions: 0,
        };
        machine.set_joystick(Port::One, Joystick::RELEASED);
        machine.set_joystick(Port::Two, Joystick::RELEASED);
        machine
    }

    /// Read memory without side effects
    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    /// Write memory without side effects
    #[inline]
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    /// Full raster line number, 0-311
    #[inline]
    pub fn raster_line(&self) -> u16 {
        self.raster
    }

    /// Frames completed since power-on
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Collision flags waiting to be read
    #[inline]
    pub fn pending_collisions(&self) -> u8 {
        self.collisions
    }

    /// Latch collision flags as if the VIC had just detected them
    pub fn set_collisions(&mut self, mask: u8) {
        self.collisions |= mask;
    }

    /// Present a joystick state on a control port
    pub fn set_joystick(&mut self, port: Port, stick: Joystick) {
        self.poke(port.register(), stick.encode());
    }

    /// One row of the text screen
    pub fn screen_row(&self, y: u8) -> &[u8] {
        debug_assert!(y < SCREEN_ROWS);
        let start = VIDEO_MEMORY as usize + y as usize * SCREEN_COLUMNS as usize;
        &self.memory[start..start + SCREEN_COLUMNS as usize]
    }

    /// Advance the beam one line, finishing the frame on wrap
    pub fn step_line(&mut self) {
        self.raster += 1;
        if self.raster == PAL_RASTER_LINES {
            self.raster = 0;
            self.frames += 1;
            self.collisions |= self.scan_collisions();
        }
    }

    /// Which enabled sprites overlap another enabled sprite right now
    ///
    /// Transparent pixels never collide; multicolor code 0 is transparent.
    pub fn scan_collisions(&self) -> u8 {
        let enabled = self.peek(SPRITE_ENABLE_BITS);
        let mut shapes: [Option<Shape>; MAX_SPRITES as usize] = [None; MAX_SPRITES as usize];
        for id in 0..MAX_SPRITES {
            if test_bit(enabled, id) {
                shapes[id as usize] = Some(self.shape(id));
            }
        }

        let mut hits = 0u8;
        for a in 0..shapes.len() {
            for b in a + 1..shapes.len() {
                if let (Some(sa), Some(sb)) = (&shapes[a], &shapes[b]) {
                    if sa.overlaps(sb) {
                        hits |= (1 << a) | (1 << b);
                    }
                }
            }
        }
        hits
    }

    fn flag(&self, register: u16, id: u8) -> bool {
        test_bit(self.peek(register), id)
    }

    /// Rasterise sprite `id` into per-line column masks
    fn shape(&self, id: u8) -> Shape {
        let base = self.peek(SPRITE_DATA_POINTERS + id as u16) as u16 * SPRITE_ALIGNMENT;
        let multicolor = self.flag(SPRITE_MULTICOLOR, id);
        let double_width = self.flag(SPRITE_EXPAND_HORIZONTAL, id);
        let double_height = self.flag(SPRITE_EXPAND_VERTICAL, id);

        let mut rows = [0u64; MAX_SPRITE_HEIGHT];
        for line in 0..SPRITE_LINES {
            let at = base + (line * BYTES_PER_LINE) as u16;
            let word = (self.peek(at) as u32) << 16
                | (self.peek(at + 1) as u32) << 8
                | self.peek(at + 2) as u32;

            let mut mask = if multicolor { multicolor_mask(word) } else { hires_mask(word) };
            if double_width {
                mask = widen(mask);
            }
            if double_height {
                rows[line * 2] = mask;
                rows[line * 2 + 1] = mask;
            } else {
                rows[line] = mask;
            }
        }

        let position = SPRITE_POSITION_REGISTERS + id as u16 * 2;
        Shape {
            x: self.peek(position) as i32,
            y: self.peek(position + 1) as i32,
            height: if double_height { MAX_SPRITE_HEIGHT } else { SPRITE_LINES },
            rows,
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("raster", &self.raster)
            .field("frames", &self.frames)
            .field("collisions", &self.collisions)
            .finish_non_exhaustive()
    }
}

impl Bus for Machine {
    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            SCREEN_RASTER_LINE => {
                let line = self.raster as u8;
                self.step_line();
                line
            }
            SPRITE_COLLISIONS => core::mem::take(&mut self.collisions),
            _ => self.peek(addr),
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.poke(addr, value);
    }
}

/// Opaque pixels of one sprite; bit `c` of a row is column `c` from the left
#[derive(Clone, Copy)]
struct Shape {
    x: i32,
    y: i32,
    height: usize,
    rows: [u64; MAX_SPRITE_HEIGHT],
}

impl Shape {
    fn overlaps(&self, other: &Shape) -> bool {
        let dx = other.x - self.x;
        if dx.abs() >= 64 {
            return false;
        }
        for i in 0..self.height {
            let j = self.y + i as i32 - other.y;
            if j < 0 || j as usize >= other.height {
                continue;
            }
            let theirs = other.rows[j as usize];
            let aligned = if dx >= 0 { theirs << dx } else { theirs >> -dx };
            if self.rows[i] & aligned != 0 {
                return true;
            }
        }
        false
    }
}

/// 24 one-bit pixels, most significant bit leftmost
fn hires_mask(word: u32) -> u64 {
    let mut mask = 0u64;
    for column in 0..24 {
        if (word >> (23 - column)) & 1 != 0 {
            mask |= 1 << column;
        }
    }
    mask
}

/// 12 two-bit codes, each covering two columns
fn multicolor_mask(word: u32) -> u64 {
    let mut mask = 0u64;
    for pixel in 0..12 {
        if (word >> (22 - 2 * pixel)) & 0b11 != 0 {
            mask |= 0b11 << (2 * pixel);
        }
    }
    mask
}

/// Double every column
fn widen(mask: u64) -> u64 {
    let mut wide = 0u64;
    for column in 0..24 {
        if (mask >> column) & 1 != 0 {
            wide |= 0b11 << (2 * column);
        }
    }
    wide
}
