//! Sprite bitmaps for the VIC-II
//!
//! A hardware sprite is 24 pixels wide and 21 lines tall: 63 bytes, stored in
//! a 64-byte block. Bitmaps are written as numeric literals, one per line, and
//! packed into the hardware byte layout by `const fn`s, so the encoded data can
//! live in a `const` or `static`.
//!
//! - High resolution ([`HighRes`]): one bit per pixel, 24-bit literal per line.
//! - Multicolor ([`Multicolor`]): 12 double-wide pixels per line, written as
//!   one hex digit per pixel (48-bit literal) whose low two bits hold the
//!   colour code.
//!
//! # Example
//!
//! ```
//! use c64::sprite::{HighRes, Sprite};
//!
//! const DOT: Sprite<HighRes> = Sprite::new([0x00_18_00; 21]);
//! assert_eq!(DOT.line(0).pixels(), [0x00, 0x18, 0x00]);
//! ```

use core::fmt;
use core::marker::PhantomData;

/// Bytes per sprite block; data must start on this boundary
pub const SPRITE_ALIGNMENT: u16 = 64;
/// Lines per sprite
pub const SPRITE_LINES: usize = 21;
/// Encoded bytes per line
pub const BYTES_PER_LINE: usize = 3;
/// Encoded bytes per sprite
pub const SPRITE_BYTES: usize = SPRITE_LINES * BYTES_PER_LINE;
/// The VIC-II sees a 16 KiB window of memory
pub const BANK_MASK: u16 = 0x3FFF;

/// Pixel format of a sprite
pub trait Encoding: 'static {
    /// Whether the sprite's multicolor bit must be set
    const MULTICOLOR: bool;
}

/// One bit per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighRes {}

/// Two bits per double-wide pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multicolor {}

impl Encoding for HighRes {
    const MULTICOLOR: bool = false;
}

impl Encoding for Multicolor {
    const MULTICOLOR: bool = true;
}

/// Pack the low bits of `m` into one hardware byte
///
/// Multicolor input uses four bits per pixel with the colour code in the low
/// two: `0b00ii00jj00kk00ll -> 0biijjkkll`.
#[inline]
pub const fn encode_byte(multicolor: bool, m: u64) -> u8 {
    if multicolor {
        ((m & 0x3) | ((m >> 2) & 0xC) | ((m >> 4) & 0x30) | ((m >> 6) & 0xC0)) as u8
    } else {
        m as u8
    }
}

/// Input bits consumed per output byte
#[inline]
const fn input_bits(multicolor: bool) -> u32 {
    if multicolor { 16 } else { 8 }
}

/// One encoded sprite line
#[repr(C)]
pub struct SpriteLine<E: Encoding> {
    pixels: [u8; BYTES_PER_LINE],
    _encoding: PhantomData<E>,
}

impl<E: Encoding> SpriteLine<E> {
    /// Blank line
    pub const EMPTY: Self = Self::from_pixels([0; BYTES_PER_LINE]);

    /// Encode a literal line
    pub const fn new(line: u64) -> Self {
        let ibb = input_bits(E::MULTICOLOR);
        Self::from_pixels([
            encode_byte(E::MULTICOLOR, line >> (2 * ibb)),
            encode_byte(E::MULTICOLOR, line >> ibb),
            encode_byte(E::MULTICOLOR, line),
        ])
    }

    /// Wrap already encoded bytes
    pub const fn from_pixels(pixels: [u8; BYTES_PER_LINE]) -> Self {
        SpriteLine { pixels, _encoding: PhantomData }
    }

    /// Encoded bytes, left to right
    #[inline]
    pub const fn pixels(&self) -> [u8; BYTES_PER_LINE] {
        self.pixels
    }
}

impl<E: Encoding> Clone for SpriteLine<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Encoding> Copy for SpriteLine<E> {}

impl<E: Encoding> PartialEq for SpriteLine<E> {
    fn eq(&self, other: &Self) -> bool {
        self.pixels == other.pixels
    }
}

impl<E: Encoding> Eq for SpriteLine<E> {}

impl<E: Encoding> fmt::Debug for SpriteLine<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SpriteLine({:08b} {:08b} {:08b})",
            self.pixels[0], self.pixels[1], self.pixels[2]
        )
    }
}

/// A full sprite bitmap, block aligned
#[repr(C, align(64))]
pub struct Sprite<E: Encoding> {
    lines: [SpriteLine<E>; SPRITE_LINES],
}

impl<E: Encoding> Sprite<E> {
    /// Encode 21 literal lines
    pub const fn new(lines: [u64; SPRITE_LINES]) -> Self {
        let mut encoded = [SpriteLine::<E>::EMPTY; SPRITE_LINES];
        let mut i = 0;
        while i < SPRITE_LINES {
            encoded[i] = SpriteLine::new(lines[i]);
            i += 1;
        }
        Sprite { lines: encoded }
    }

    /// Line `index` (0-20)
    #[inline]
    pub const fn line(&self, index: usize) -> &SpriteLine<E> {
        &self.lines[index]
    }

    /// All lines, top to bottom
    #[inline]
    pub const fn lines(&self) -> &[SpriteLine<E>; SPRITE_LINES] {
        &self.lines
    }

    /// Encoded bytes in hardware order
    pub const fn bytes(&self) -> [u8; SPRITE_BYTES] {
        let mut out = [0u8; SPRITE_BYTES];
        let mut i = 0;
        while i < SPRITE_BYTES {
            out[i] = self.lines[i / BYTES_PER_LINE].pixels[i % BYTES_PER_LINE];
            i += 1;
        }
        out
    }
}

impl<E: Encoding> fmt::Debug for Sprite<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lines.iter()).finish()
    }
}

/// A sprite bitmap resident in VIC-visible memory
///
/// Produced by [`crate::vic::Vic::upload_sprite`] and consumed by
/// [`crate::vic::Vic::enable_sprite`]; the encoding travels in the type so
/// the multicolor bit always matches the data.
pub struct SpriteData<E: Encoding> {
    address: u16,
    _encoding: PhantomData<E>,
}

impl<E: Encoding> SpriteData<E> {
    /// Refer to sprite data already stored at `address`
    pub const fn at(address: u16) -> Self {
        SpriteData { address, _encoding: PhantomData }
    }

    /// Start address of the data
    #[inline]
    pub const fn address(&self) -> u16 {
        self.address
    }

    /// Value for the sprite data pointer table
    #[inline]
    pub const fn pointer(&self) -> u8 {
        ((self.address & BANK_MASK) / SPRITE_ALIGNMENT) as u8
    }
}

impl<E: Encoding> Clone for SpriteData<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Encoding> Copy for SpriteData<E> {}

impl<E: Encoding> fmt::Debug for SpriteData<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpriteData")
            .field("address", &self.address)
            .field("multicolor", &E::MULTICOLOR)
            .finish()
    }
}
