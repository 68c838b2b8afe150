//! Single-bit register access
//!
//! Most VIC-II sprite registers pack one flag per sprite into a byte. These
//! helpers touch exactly one of those flags.

use crate::bus::Bus;

/// Check bit `index` of `data`
#[inline]
pub const fn test_bit(data: u8, index: u8) -> bool {
    (data & (1 << index)) != 0
}

/// Read bit `index` of the register at `addr`
#[inline]
pub fn read_bit<B: Bus + ?Sized>(bus: &mut B, addr: u16, index: u8) -> bool {
    test_bit(bus.read(addr), index)
}

/// Set or clear bit `index` of the register at `addr`
///
/// Read-modify-write: the other seven bits are written back unchanged.
#[inline]
pub fn write_bit<B: Bus + ?Sized>(bus: &mut B, addr: u16, index: u8, value: bool) {
    let mask = 1u8 << index;
    let current = bus.read(addr);
    let next = if value { current | mask } else { current & !mask };
    bus.write(addr, next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Machine;

    #[test]
    fn test_test_bit() {
        assert!(test_bit(0b0000_0100, 2));
        assert!(!test_bit(0b0000_0100, 3));
        assert!(test_bit(0x80, 7));
    }

    #[test]
    fn test_write_bit_sets_only_target() {
        let mut machine = Machine::new();
        machine.poke(0xD015, 0b1010_0000);
        write_bit(&mut machine, 0xD015, 0, true);
        assert_eq!(machine.peek(0xD015), 0b1010_0001);
    }

    #[test]
    fn test_write_bit_clears_only_target() {
        let mut machine = Machine::new();
        machine.poke(0xD01D, 0xFF);
        write_bit(&mut machine, 0xD01D, 5, false);
        assert_eq!(machine.peek(0xD01D), 0b1101_1111);
        assert!(!read_bit(&mut machine, 0xD01D, 5));
        assert!(read_bit(&mut machine, 0xD01D, 4));
    }
}
