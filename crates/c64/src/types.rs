//! Common type definitions
//!
//! Sprite coordinates are 8-bit hardware counters; movement is expressed as a
//! small signed [`Vector`] added with wrap-around.

/// 2D vector with signed 8-bit components
///
/// # Example
/// ```
/// use c64::types::Vector;
///
/// let v = Vector::new(1, 1).flip_x();
/// assert_eq!(v, Vector::new(-1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub x: i8,
    pub y: i8,
}

impl Vector {
    /// Zero vector
    pub const ZERO: Vector = Vector { x: 0, y: 0 };

    /// Create new vector
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Vector { x, y }
    }

    /// Negate the x component
    #[inline]
    pub const fn flip_x(self) -> Self {
        Vector { x: self.x.wrapping_neg(), y: self.y }
    }

    /// Negate the y component
    #[inline]
    pub const fn flip_y(self) -> Self {
        Vector { x: self.x, y: self.y.wrapping_neg() }
    }

    /// Scale both components
    #[inline]
    pub const fn scale(self, factor: i8) -> Self {
        Vector {
            x: self.x.wrapping_mul(factor),
            y: self.y.wrapping_mul(factor),
        }
    }

    /// Keep only the horizontal component
    #[inline]
    pub const fn horizontal(self) -> Self {
        Vector { x: self.x, y: 0 }
    }

    /// Keep only the vertical component
    #[inline]
    pub const fn vertical(self) -> Self {
        Vector { x: 0, y: self.y }
    }
}

impl core::ops::Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
}

impl core::ops::Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

impl From<(i8, i8)> for Vector {
    #[inline]
    fn from((x, y): (i8, i8)) -> Self {
        Vector { x, y }
    }
}
