//! Property-based tests for HAL invariants.
//!
//! These tests use proptest to check the colour matcher, the bit accessor and
//! the sprite encoder across arbitrary inputs.

use c64::bits::{read_bit, write_bit};
use c64::color::{Color, PALETTE, nearest_color};
use c64::input::Joystick;
use c64::sim::Machine;
use c64::sprite::{HighRes, Multicolor, SpriteLine, encode_byte};
use proptest::prelude::*;

/// Strategy for a small arbitrary palette with unique indices
fn palette() -> impl Strategy<Value = Vec<Color>> {
    prop::collection::vec(any::<(u8, u8, u8)>(), 1..24).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (r, g, b))| Color::new(i as u8, r, g, b))
            .collect()
    })
}

/// Rebuild the 24-bit literal from a high-res line
fn decode_hires(pixels: [u8; 3]) -> u64 {
    (pixels[0] as u64) << 16 | (pixels[1] as u64) << 8 | pixels[2] as u64
}

proptest! {
    #[test]
    fn prop_nearest_is_minimal(palette in palette(), r: u8, g: u8, b: u8) {
        let best = nearest_color(&palette, r, g, b).unwrap();
        let best_distance = best.distance(r, g, b);
        for color in &palette {
            prop_assert!(best_distance <= color.distance(r, g, b));
        }
    }

    #[test]
    fn prop_nearest_prefers_earliest(palette in palette(), r: u8, g: u8, b: u8) {
        let best = nearest_color(&palette, r, g, b).unwrap();
        let first_minimal = palette
            .iter()
            .find(|c| c.distance(r, g, b) == best.distance(r, g, b))
            .unwrap();
        prop_assert_eq!(best.index, first_minimal.index);
    }

    #[test]
    fn prop_builtin_palette_minimal(r: u8, g: u8, b: u8) {
        let best = Color::nearest(r, g, b);
        prop_assert!(PALETTE.iter().all(|c| best.distance(r, g, b) <= c.distance(r, g, b)));
    }

    #[test]
    fn prop_write_then_read_bit(initial: u8, index in 0u8..8, value: bool) {
        let mut machine = Machine::new();
        machine.poke(0xD015, initial);
        write_bit(&mut machine, 0xD015, index, value);
        prop_assert_eq!(read_bit(&mut machine, 0xD015, index), value);
    }

    #[test]
    fn prop_write_bit_preserves_others(initial: u8, index in 0u8..8, value: bool) {
        let mut machine = Machine::new();
        machine.poke(0xD01C, initial);
        write_bit(&mut machine, 0xD01C, index, value);
        let others = !(1u8 << index);
        prop_assert_eq!(machine.peek(0xD01C) & others, initial & others);
    }

    #[test]
    fn prop_hires_round_trip(line in 0u64..(1 << 24)) {
        let encoded = SpriteLine::<HighRes>::new(line);
        prop_assert_eq!(decode_hires(encoded.pixels()), line);
    }

    #[test]
    fn prop_multicolor_fields(line in 0u64..(1 << 48)) {
        let pixels = SpriteLine::<Multicolor>::new(line).pixels();
        for (byte_index, byte) in pixels.iter().enumerate() {
            let group = (line >> (16 * (2 - byte_index))) & 0xFFFF;
            for field in 0..4 {
                let source = (group >> (4 * field)) & 0b11;
                let packed = (*byte as u64 >> (2 * field)) & 0b11;
                prop_assert_eq!(packed, source);
            }
        }
    }

    #[test]
    fn prop_hires_encode_is_truncation(m: u64) {
        prop_assert_eq!(encode_byte(false, m), m as u8);
    }

    #[test]
    fn prop_joystick_encode_decode(raw in any::<u8>()) {
        let stick = Joystick::decode(raw);
        // bits above the fire line are not driven by the stick
        prop_assert_eq!(stick.encode() & 0x1F, raw & 0x1F);
        prop_assert_eq!(Joystick::decode(stick.encode()), stick);
    }
}
