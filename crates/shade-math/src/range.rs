//! Scalar intervals.

use crate::Vec2;

/// A scalar (min, max) interval.
///
/// Shader code passes intervals around as `vec2(min, max)`; this is the
/// named CPU form. `min <= max` is conventional and never enforced: a
/// reversed range is legal input and simply reverses the direction of any
/// remap through it, and a zero-width range makes remapping divide by zero.
///
/// # Example
///
/// ```rust
/// use shade_math::Range;
///
/// let bound = Range::new(-100.0, 100.0);
/// assert_eq!(bound.width(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range {
    /// Lower end of the interval.
    pub min: f32,
    /// Upper end of the interval.
    pub max: f32,
}

impl Range {
    /// The normalized [0, 1] interval.
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// The 8-bit [0, 255] color interval.
    pub const RGB8: Self = Self::new(0.0, 255.0);

    /// Creates a new range.
    #[inline]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Signed width of the interval (`max - min`).
    ///
    /// Negative for reversed ranges, zero for degenerate ones.
    #[inline]
    pub fn width(self) -> f32 {
        self.max - self.min
    }

    /// Returns true if the value lies inside the interval (inclusive).
    #[inline]
    pub fn contains(self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<Vec2> for Range {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Range> for Vec2 {
    #[inline]
    fn from(r: Range) -> Vec2 {
        Vec2::new(r.min, r.max)
    }
}

impl From<(f32, f32)> for Range {
    #[inline]
    fn from((min, max): (f32, f32)) -> Self {
        Self::new(min, max)
    }
}

impl From<[f32; 2]> for Range {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_width() {
        assert_eq!(Range::new(0.0, 10.0).width(), 10.0);
        assert_eq!(Range::new(10.0, 0.0).width(), -10.0);
        assert_eq!(Range::UNIT.width(), 1.0);
    }

    #[test]
    fn test_range_contains() {
        let r = Range::new(-1.0, 1.0);
        assert!(r.contains(0.0));
        assert!(r.contains(-1.0));
        assert!(!r.contains(1.5));
    }

    #[test]
    fn test_range_from_vec2() {
        let r = Range::from(Vec2::new(2.0, 5.0));
        assert_eq!(r, Range::new(2.0, 5.0));
        assert_eq!(Vec2::from(r), Vec2::new(2.0, 5.0));
    }
}
