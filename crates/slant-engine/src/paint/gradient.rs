use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `offset` is expected in [0, 1] but is not enforced. Stops are kept in the
/// order the host reported them; nothing sorts them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient definition in object space.
///
/// Semantics:
/// - `start` and `end` are fractions of the shape's box: (0, 0) is the
///   top-left corner, (1, 1) the bottom-right, +Y grows downward.
/// - `stops` are positioned along `start → end`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// True when `start` and `end` coincide, leaving no direction to convert.
    #[inline]
    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }

    /// Returns true when every coordinate, offset and channel is finite.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.offset.is_finite() && s.color.is_finite())
    }
}
