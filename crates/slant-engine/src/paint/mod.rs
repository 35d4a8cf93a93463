//! Paint model read from the host.
//!
//! Scope:
//! - color representation (straight alpha, 0–255 channels)
//! - fills a selected shape can carry (solid, linear gradient)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};

/// Fill reported for a selected shape.
///
/// Only `LinearGradient` converts; every other fill is reported as
/// inapplicable by the shape resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Returns the gradient when this fill can be converted.
    ///
    /// A linear gradient without stops is treated like no gradient at all.
    #[inline]
    pub fn as_linear_gradient(&self) -> Option<&LinearGradient> {
        match self {
            Paint::Solid(_) => None,
            Paint::LinearGradient(g) if g.stops.is_empty() => None,
            Paint::LinearGradient(g) => Some(g),
        }
    }
}
