//! Typed register handles
//!
//! A [`Reg`] names one byte of the address space. It holds no data of its own:
//! every `get` goes to the bus and every `set` lands on the hardware
//! immediately, so a handle behaves like a live reference to the register.

use crate::bits;
use crate::bus::Bus;
use crate::types::Vector;

/// Handle to a byte-wide hardware register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Reg(u16);

impl Reg {
    /// Create a handle for the register at `addr`
    #[inline]
    pub const fn at(addr: u16) -> Self {
        Reg(addr)
    }

    /// Register address
    #[inline]
    pub const fn addr(self) -> u16 {
        self.0
    }

    /// Handle `offset` bytes further on
    #[inline]
    pub const fn offset(self, offset: u16) -> Self {
        Reg(self.0.wrapping_add(offset))
    }

    /// Read the current register value
    #[inline]
    pub fn get<B: Bus + ?Sized>(self, bus: &mut B) -> u8 {
        bus.read(self.0)
    }

    /// Store a value
    #[inline]
    pub fn set<B: Bus + ?Sized>(self, bus: &mut B, value: u8) {
        bus.write(self.0, value);
    }

    /// Read-modify-write; returns the stored value
    #[inline]
    pub fn update<B: Bus + ?Sized>(self, bus: &mut B, f: impl FnOnce(u8) -> u8) -> u8 {
        let value = f(bus.read(self.0));
        bus.write(self.0, value);
        value
    }

    /// Test one bit
    #[inline]
    pub fn bit<B: Bus + ?Sized>(self, bus: &mut B, index: u8) -> bool {
        bits::read_bit(bus, self.0, index)
    }

    /// Set or clear one bit, leaving the others untouched
    #[inline]
    pub fn set_bit<B: Bus + ?Sized>(self, bus: &mut B, index: u8, value: bool) {
        bits::write_bit(bus, self.0, index, value);
    }
}

/// Live (x, y) handle pair for a sprite position
///
/// Both coordinates are the 8-bit sprite position registers; arithmetic
/// wraps the way the hardware counters do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: Reg,
    pub y: Reg,
}

impl Position {
    /// Pair two register handles
    #[inline]
    pub const fn new(x: Reg, y: Reg) -> Self {
        Position { x, y }
    }

    /// Current coordinates
    pub fn get<B: Bus + ?Sized>(self, bus: &mut B) -> (u8, u8) {
        (self.x.get(bus), self.y.get(bus))
    }

    /// Move to absolute coordinates
    pub fn set<B: Bus + ?Sized>(self, bus: &mut B, (x, y): (u8, u8)) {
        self.x.set(bus, x);
        self.y.set(bus, y);
    }

    /// Add a vector to both axes; returns the resulting coordinates
    pub fn translate<B: Bus + ?Sized>(self, bus: &mut B, by: Vector) -> (u8, u8) {
        let x = self.x.update(bus, |x| x.wrapping_add_signed(by.x));
        let y = self.y.update(bus, |y| y.wrapping_add_signed(by.y));
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Machine;

    #[test]
    fn test_reg_bit_handle() {
        let mut machine = Machine::new();
        let reg = Reg::at(0xC010);
        reg.set(&mut machine, 0b1010_0001);
        reg.set_bit(&mut machine, 3, true);
        assert!(reg.bit(&mut machine, 3));
        reg.set_bit(&mut machine, 0, false);
        assert!(!reg.bit(&mut machine, 0));
        assert_eq!(machine.peek(0xC010), 0b1010_1000);
    }

    #[test]
    fn test_reg_set_get() {
        let mut machine = Machine::new();
        let reg = Reg::at(0xC000);
        reg.set(&mut machine, 0x5A);
        assert_eq!(reg.get(&mut machine), 0x5A);
        assert_eq!(machine.peek(0xC000), 0x5A);
    }

    #[test]
    fn test_reg_update_returns_new_value() {
        let mut machine = Machine::new();
        let reg = Reg::at(0x0400);
        reg.set(&mut machine, 9);
        assert_eq!(reg.update(&mut machine, |v| v + 1), 10);
        assert_eq!(machine.peek(0x0400), 10);
    }

    #[test]
    fn test_position_translate_wraps() {
        let mut machine = Machine::new();
        let pos = Position::new(Reg::at(0xD000), Reg::at(0xD001));
        pos.set(&mut machine, (255, 0));
        assert_eq!(pos.translate(&mut machine, Vector::new(1, -1)), (0, 255));
        assert_eq!(pos.get(&mut machine), (0, 255));
    }

    #[test]
    fn test_handles_alias_hardware() {
        let mut machine = Machine::new();
        let pos = Position::new(Reg::at(0xD002), Reg::at(0xD003));
        machine.poke(0xD003, 77);
        assert_eq!(pos.get(&mut machine).1, 77);
    }
}
