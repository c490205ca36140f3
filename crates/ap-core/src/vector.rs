//! The pixel offset produced by the engine.

use std::fmt;

/// A 2D pixel offset applied to an arrow glyph by the rendering layer.
///
/// Values come straight from the placement tables (possibly negated or
/// swapped), so they are always finite.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjustmentVector {
    pub x: f64,
    pub y: f64,
}

impl AdjustmentVector {
    /// No adjustment.
    pub const ZERO: AdjustmentVector = AdjustmentVector { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `true` if both components are exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// `true` if the two vectors have identical bit patterns.
    ///
    /// Stricter than `==`: distinguishes `0.0` from `-0.0`.  Determinism
    /// checks compare with this.
    #[inline]
    pub fn bit_eq(self, other: AdjustmentVector) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl From<(f64, f64)> for AdjustmentVector {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for AdjustmentVector {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<AdjustmentVector> for (f64, f64) {
    #[inline]
    fn from(v: AdjustmentVector) -> Self {
        (v.x, v.y)
    }
}

impl fmt::Display for AdjustmentVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
