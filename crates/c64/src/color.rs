//! System palette and nearest-colour matching
//!
//! The VIC-II has a fixed 16-colour palette. Colour registers take a palette
//! index; [`Color::nearest`] picks the index whose RGB approximation is
//! closest to a requested colour, and runs at compile time.
//!
//! # Example
//!
//! ```
//! use c64::color::Color;
//!
//! const BLACK: Color = Color::nearest(0, 0, 0);
//! assert_eq!(BLACK.index, 0);
//! ```

/// Palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Value written to a colour register
    pub index: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a palette entry
    #[inline]
    pub const fn new(index: u8, r: u8, g: u8, b: u8) -> Self {
        Color { index, r, g, b }
    }

    /// Squared euclidean distance to an RGB triple
    #[inline]
    pub const fn distance(&self, r: u8, g: u8, b: u8) -> u32 {
        let dr = self.r as i32 - r as i32;
        let dg = self.g as i32 - g as i32;
        let db = self.b as i32 - b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Closest entry of the built-in [`PALETTE`]
    pub const fn nearest(r: u8, g: u8, b: u8) -> Color {
        match nearest_color(&PALETTE, r, g, b) {
            Some(color) => color,
            None => PALETTE[0],
        }
    }
}

/// Approximate RGB values of the 16 VIC-II colours
pub const PALETTE: [Color; 16] = [
    Color::new(0, 0x00, 0x00, 0x00),
    Color::new(1, 0xFF, 0xFF, 0xFF),
    Color::new(2, 0x88, 0x39, 0x32),
    Color::new(3, 0x67, 0xB6, 0xBD),
    Color::new(4, 0x8B, 0x3F, 0x96),
    Color::new(5, 0x55, 0xA0, 0x49),
    Color::new(6, 0x40, 0x31, 0x8D),
    Color::new(7, 0xBF, 0xCE, 0x72),
    Color::new(8, 0x8B, 0x54, 0x29),
    Color::new(9, 0x57, 0x42, 0x00),
    Color::new(10, 0xB8, 0x69, 0x62),
    Color::new(11, 0x50, 0x50, 0x50),
    Color::new(12, 0x78, 0x78, 0x78),
    Color::new(13, 0x94, 0xE0, 0x89),
    Color::new(14, 0x78, 0x69, 0xC4),
    Color::new(15, 0x9F, 0x9F, 0x9F),
];

/// Find the palette entry closest to `(r, g, b)`
///
/// Linear scan; only a strictly smaller distance replaces the current best,
/// so ties go to the earliest entry. Returns `None` for an empty palette.
pub const fn nearest_color(palette: &[Color], r: u8, g: u8, b: u8) -> Option<Color> {
    if palette.is_empty() {
        return None;
    }
    let mut best = palette[0];
    let mut best_distance = best.distance(r, g, b);
    let mut i = 1;
    while i < palette.len() {
        let distance = palette[i].distance(r, g, b);
        if distance < best_distance {
            best = palette[i];
            best_distance = distance;
        }
        i += 1;
    }
    Some(best)
}
