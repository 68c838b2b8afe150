//! VIC-II video chip interface
//!
//! The VIC-II draws the 40x25 text screen and composites up to eight
//! hardware sprites over it. Everything here is a thin layer over its
//! registers:
//! - border and background colour
//! - character cells of the text screen
//! - sprite pointers, enable/expand/multicolor/priority flags, colours and
//!   positions
//! - the sprite-sprite collision latch
//! - frame pacing by polling the raster line
//!
//! # Example
//!
//! ```no_run
//! use c64::bus::Mmio;
//! use c64::color::Color;
//! use c64::vic::Vic;
//!
//! let mut vic = Vic::new(unsafe { Mmio::new() });
//! let border = vic.border();
//! border.set(&mut vic, Color::nearest(0, 0, 0).index);
//!
//! loop {
//!     vic.wait_for_raster(250);
//!     // Game logic here
//! }
//! ```

use core::ops::{Deref, DerefMut};

use log::trace;

use crate::bits::test_bit;
use crate::bus::Bus;
use crate::reg::{Position, Reg};
use crate::sprite::{BANK_MASK, Encoding, SPRITE_ALIGNMENT, Sprite, SpriteData};

/// Register addresses
pub mod regs {
    /// Sprite pointer table at the end of screen memory
    pub const SPRITE_DATA_POINTERS: u16 = 2040;
    /// Start of the VIC-II register block
    pub const VIDEO_REGISTERS: u16 = 53248;
    /// Text screen, 40x25 character codes
    pub const VIDEO_MEMORY: u16 = 1024;
    /// Border colour
    pub const BORDER_COLOR: u16 = 53280;
    /// Background colour
    pub const BACKGROUND_COLOR: u16 = 53281;
    /// Sprite x/y pairs, sprite 0 first
    pub const SPRITE_POSITION_REGISTERS: u16 = VIDEO_REGISTERS;
    /// One enable flag per sprite
    pub const SPRITE_ENABLE_BITS: u16 = VIDEO_REGISTERS + 21;
    /// One double-height flag per sprite
    pub const SPRITE_EXPAND_VERTICAL: u16 = VIDEO_REGISTERS + 23;
    /// One behind-background flag per sprite
    pub const SPRITE_PRIORITY: u16 = VIDEO_REGISTERS + 27;
    /// One multicolor flag per sprite
    pub const SPRITE_MULTICOLOR: u16 = VIDEO_REGISTERS + 28;
    /// One double-width flag per sprite
    pub const SPRITE_EXPAND_HORIZONTAL: u16 = VIDEO_REGISTERS + 29;
    /// Sprite-sprite collision latch, cleared on read
    pub const SPRITE_COLLISIONS: u16 = VIDEO_REGISTERS + 30;
    /// Colour of sprite 0; sprites 1-7 follow
    pub const SPRITE_0_COLOR: u16 = VIDEO_REGISTERS + 39;
    /// Colour of sprite 1
    pub const SPRITE_1_COLOR: u16 = SPRITE_0_COLOR + 1;
    /// Colour of sprite 2
    pub const SPRITE_2_COLOR: u16 = SPRITE_1_COLOR + 1;
    /// Low eight bits of the current raster line
    pub const SCREEN_RASTER_LINE: u16 = 53266;
}

use regs::*;

/// Text screen width in cells
pub const SCREEN_COLUMNS: u8 = 40;
/// Text screen height in cells
pub const SCREEN_ROWS: u8 = 25;
/// Number of hardware sprites
pub const MAX_SPRITES: u8 = 8;
/// Raster line a [`Frame`] starts on, just below the visible area
pub const FRAME_TRIGGER_LINE: u8 = 250;

/// Character ROM shadow inside the VIC bank; sprite data there is invisible
const CHAR_ROM_SHADOW: core::ops::Range<u16> = 0x1000..0x2000;

/// Decoded sprite-sprite collision flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Collisions(pub u8);

impl Collisions {
    /// No sprite collided
    pub const NONE: Collisions = Collisions(0);

    /// Whether sprite `id` touched another sprite
    #[inline]
    pub const fn sprite(self, id: u8) -> bool {
        test_bit(self.0, id)
    }

    /// One flag per sprite, sprite 0 first
    pub const fn as_array(self) -> [bool; 8] {
        let mut flags = [false; 8];
        let mut i = 0;
        while i < 8 {
            flags[i] = test_bit(self.0, i as u8);
            i += 1;
        }
        flags
    }

    /// Whether anything collided
    #[inline]
    pub const fn any(self) -> bool {
        self.0 != 0
    }
}

/// The VIC-II seen through a bus
///
/// `Vic` is itself a [`Bus`], so register handles it returns can be used
/// against it directly:
///
/// ```
/// use c64::sim::Machine;
/// use c64::vic::Vic;
///
/// let mut vic = Vic::new(Machine::new());
/// let ball = vic.sprite_pos(0);
/// ball.set(&mut vic, (127, 127));
/// assert_eq!(ball.get(&mut vic), (127, 127));
/// ```
#[derive(Debug)]
pub struct Vic<B: Bus> {
    bus: B,
}

impl<B: Bus> Vic<B> {
    /// Wrap a bus
    pub const fn new(bus: B) -> Self {
        Vic { bus }
    }

    /// Underlying bus
    #[inline]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Underlying bus, mutable
    #[inline]
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give the bus back
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Border colour register
    #[inline]
    pub const fn border(&self) -> Reg {
        Reg::at(BORDER_COLOR)
    }

    /// Background colour register
    #[inline]
    pub const fn background(&self) -> Reg {
        Reg::at(BACKGROUND_COLOR)
    }

    /// Character cell at column `x`, row `y`
    ///
    /// Coordinates are not checked in release builds; out of range cells
    /// land wherever the address arithmetic points.
    #[inline]
    pub fn display(&self, x: u8, y: u8) -> Reg {
        debug_assert!(x < SCREEN_COLUMNS && y < SCREEN_ROWS, "cell ({x}, {y}) off screen");
        Reg::at(VIDEO_MEMORY.wrapping_add(y as u16 * SCREEN_COLUMNS as u16 + x as u16))
    }

    /// Copy an encoded sprite to `address` so the VIC can fetch it
    ///
    /// `address` must be 64-byte aligned, inside the active 16 KiB bank and
    /// outside the character ROM shadow. Only debug builds check this.
    pub fn upload_sprite<E: Encoding>(&mut self, address: u16, sprite: &Sprite<E>) -> SpriteData<E> {
        debug_assert!(address % SPRITE_ALIGNMENT == 0, "sprite data at {address:#06x} is not block aligned");
        debug_assert!(
            !CHAR_ROM_SHADOW.contains(&(address & BANK_MASK)),
            "sprite data at {address:#06x} is hidden by character ROM"
        );
        for (offset, byte) in sprite.bytes().iter().enumerate() {
            self.bus.write(address.wrapping_add(offset as u16), *byte);
        }
        trace!("uploaded {} sprite to {address:#06x}", if E::MULTICOLOR { "multicolor" } else { "hires" });
        SpriteData::at(address)
    }

    /// Point sprite `id` at `data` and switch it on
    ///
    /// The multicolor flag comes from the data's encoding, so a bitmap is
    /// always shown in the mode it was encoded for.
    pub fn enable_sprite<E: Encoding>(
        &mut self,
        id: u8,
        data: &SpriteData<E>,
        low_priority: bool,
        double_width: bool,
        double_height: bool,
    ) {
        debug_assert!(id < MAX_SPRITES, "no sprite {id}");
        let pointer = Reg::at(SPRITE_DATA_POINTERS).offset(id as u16);
        pointer.set(&mut self.bus, data.pointer());

        Reg::at(SPRITE_ENABLE_BITS).set_bit(&mut self.bus, id, true);
        Reg::at(SPRITE_EXPAND_HORIZONTAL).set_bit(&mut self.bus, id, double_width);
        Reg::at(SPRITE_EXPAND_VERTICAL).set_bit(&mut self.bus, id, double_height);
        Reg::at(SPRITE_MULTICOLOR).set_bit(&mut self.bus, id, E::MULTICOLOR);
        Reg::at(SPRITE_PRIORITY).set_bit(&mut self.bus, id, low_priority);
        trace!("sprite {id} enabled, block {}", data.pointer());
    }

    /// Read and decode the collision latch
    ///
    /// The hardware clears the latch on read.
    pub fn sprite_collisions(&mut self) -> Collisions {
        Collisions(self.bus.read(SPRITE_COLLISIONS))
    }

    /// Colour register of sprite `id`
    #[inline]
    pub const fn sprite_color(&self, id: u8) -> Reg {
        Reg::at(SPRITE_0_COLOR + id as u16)
    }

    /// Colour register of sprite 1
    #[inline]
    pub const fn sprite_1_color(&self) -> Reg {
        Reg::at(SPRITE_1_COLOR)
    }

    /// Colour register of sprite 2
    #[inline]
    pub const fn sprite_2_color(&self) -> Reg {
        Reg::at(SPRITE_2_COLOR)
    }

    /// Live position handles of sprite `id`
    #[inline]
    pub const fn sprite_pos(&self, id: u8) -> Position {
        let x = Reg::at(SPRITE_POSITION_REGISTERS + id as u16 * 2);
        Position::new(x, x.offset(1))
    }

    /// Low byte of the current raster line
    #[inline]
    pub fn raster(&mut self) -> u8 {
        self.bus.read(SCREEN_RASTER_LINE)
    }

    /// Spin until the raster counter reads `line`
    ///
    /// There is no timeout.
    pub fn wait_for_raster(&mut self, line: u8) {
        while self.raster() != line {}
    }

    /// Begin a frame
    ///
    /// Blocks until the raster reaches [`FRAME_TRIGGER_LINE`]. `hook` runs
    /// its [`FrameHook::end_frame`] when the returned guard goes out of scope.
    pub fn frame<'a, H: FrameHook<B>>(&'a mut self, hook: &'a mut H) -> Frame<'a, B, H> {
        self.wait_for_raster(FRAME_TRIGGER_LINE);
        trace!("frame start");
        Frame { vic: self, hook }
    }
}

impl<B: Bus> Bus for Vic<B> {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }
}

/// Work to run when a frame ends
pub trait FrameHook<B: Bus> {
    /// Called once as the frame guard is dropped
    fn end_frame(&mut self, vic: &mut Vic<B>);
}

/// One display refresh
///
/// Derefs to the [`Vic`]. Dropping the guard, by falling off the end of the
/// loop body, an early `return`/`continue`, or a panic, runs the hook.
pub struct Frame<'a, B: Bus, H: FrameHook<B>> {
    vic: &'a mut Vic<B>,
    hook: &'a mut H,
}

impl<B: Bus, H: FrameHook<B>> Frame<'_, B, H> {
    /// The chip and the hook, borrowed together
    pub fn parts(&mut self) -> (&mut Vic<B>, &mut H) {
        (&mut *self.vic, &mut *self.hook)
    }
}

impl<B: Bus, H: FrameHook<B>> Deref for Frame<'_, B, H> {
    type Target = Vic<B>;

    fn deref(&self) -> &Vic<B> {
        &*self.vic
    }
}

impl<B: Bus, H: FrameHook<B>> DerefMut for Frame<'_, B, H> {
    fn deref_mut(&mut self) -> &mut Vic<B> {
        &mut *self.vic
    }
}

impl<B: Bus, H: FrameHook<B>> Drop for Frame<'_, B, H> {
    fn drop(&mut self) {
        self.hook.end_frame(&mut *self.vic);
        trace!("frame end");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Machine;
    use crate::sprite::{HighRes, Multicolor};
    use pretty_assertions::assert_eq;

    const BLOCK: Sprite<HighRes> = Sprite::new([0xFFFFFF; 21]);
    const BAR: Sprite<Multicolor> = Sprite::new([0x000002200000; 21]);

    #[test]
    fn test_colour_registers() {
        let mut vic = Vic::new(Machine::new());
        let border = vic.border();
        border.set(&mut vic, 11);
        let background = vic.background();
        background.set(&mut vic, 0);
        assert_eq!(vic.bus().peek(BORDER_COLOR), 11);
        assert_eq!(vic.sprite_1_color().addr(), 53288);
        assert_eq!(vic.sprite_2_color().addr(), 53289);
        assert_eq!(vic.sprite_color(2), vic.sprite_2_color());
    }

    #[test]
    fn test_display_cell_address() {
        let vic = Vic::new(Machine::new());
        assert_eq!(vic.display(0, 0).addr(), 1024);
        assert_eq!(vic.display(10, 12).addr(), 1024 + 12 * 40 + 10);
        assert_eq!(vic.display(39, 24).addr(), 1024 + 999);
    }

    #[test]
    fn test_sprite_pos_registers() {
        let vic = Vic::new(Machine::new());
        let pos = vic.sprite_pos(2);
        assert_eq!(pos.x.addr(), 53252);
        assert_eq!(pos.y.addr(), 53253);
    }

    #[test]
    fn test_enable_sprite_sets_flags() {
        let mut vic = Vic::new(Machine::new());
        vic.bus_mut().poke(SPRITE_ENABLE_BITS, 0b1000_0000);
        let ball = vic.upload_sprite(832, &BLOCK);
        let bat = vic.upload_sprite(896, &BAR);
        vic.enable_sprite(0, &ball, true, false, false);
        vic.enable_sprite(2, &bat, false, false, true);

        let m = vic.bus();
        assert_eq!(m.peek(SPRITE_DATA_POINTERS), 13);
        assert_eq!(m.peek(SPRITE_DATA_POINTERS + 2), 14);
        assert_eq!(m.peek(SPRITE_ENABLE_BITS), 0b1000_0101);
        assert_eq!(m.peek(SPRITE_MULTICOLOR), 0b0000_0100);
        assert_eq!(m.peek(SPRITE_PRIORITY), 0b0000_0001);
        assert_eq!(m.peek(SPRITE_EXPAND_VERTICAL), 0b0000_0100);
        assert_eq!(m.peek(SPRITE_EXPAND_HORIZONTAL), 0);
        assert_eq!(m.peek(896 + 1), 0x28);
    }

    #[test]
    fn test_enable_clears_stale_flags() {
        let mut vic = Vic::new(Machine::new());
        vic.bus_mut().poke(SPRITE_MULTICOLOR, 0xFF);
        vic.bus_mut().poke(SPRITE_EXPAND_HORIZONTAL, 0xFF);
        let ball = vic.upload_sprite(832, &BLOCK);
        vic.enable_sprite(3, &ball, false, false, false);
        assert_eq!(vic.bus().peek(SPRITE_MULTICOLOR), 0b1111_0111);
        assert_eq!(vic.bus().peek(SPRITE_EXPAND_HORIZONTAL), 0b1111_0111);
    }

    #[test]
    fn test_collisions_decode() {
        let mut vic = Vic::new(Machine::new());
        vic.bus_mut().set_collisions(0b0000_0101);
        let hits = vic.sprite_collisions();
        assert!(hits.sprite(0));
        assert!(!hits.sprite(1));
        assert!(hits.sprite(2));
        assert!(hits.any());
        assert_eq!(
            hits.as_array(),
            [true, false, true, false, false, false, false, false]
        );
        // latch cleared by the read
        assert_eq!(vic.sprite_collisions(), Collisions::NONE);
        assert!(!Collisions::NONE.any());
    }

    struct Counter {
        ended: u32,
    }

    impl FrameHook<Machine> for Counter {
        fn end_frame(&mut self, vic: &mut Vic<Machine>) {
            self.ended += 1;
            let cell = vic.display(0, 0);
            cell.set(vic, b'0' + self.ended as u8);
        }
    }

    #[test]
    fn test_frame_waits_for_trigger_line() {
        let mut vic = Vic::new(Machine::new());
        let mut counter = Counter { ended: 0 };
        {
            let frame = vic.frame(&mut counter);
            assert_eq!(frame.bus().raster_line(), FRAME_TRIGGER_LINE as u16 + 1);
        }
        assert_eq!(counter.ended, 1);
        assert_eq!(vic.bus().peek(VIDEO_MEMORY), b'1');
    }

    #[test]
    fn test_frame_end_runs_on_early_exit() {
        let mut vic = Vic::new(Machine::new());
        let mut counter = Counter { ended: 0 };
        for round in 0..3 {
            let mut frame = vic.frame(&mut counter);
            if round == 1 {
                continue;
            }
            let (_, hook) = frame.parts();
            assert!(hook.ended < 3);
        }
        assert_eq!(counter.ended, 3);
        assert_eq!(vic.bus().frames(), 2);
    }
}
