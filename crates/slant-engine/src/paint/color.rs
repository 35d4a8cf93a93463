/// Straight-alpha RGBA color on the host's 0–255 scale.
///
/// Channels are `f64` because hosts may hand out fractional channel values;
/// nothing here clamps them. Formatting as CSS lives in [`crate::css`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Alpha value of a fully opaque color.
    pub const OPAQUE: f64 = 255.0;

    #[inline]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    #[inline]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, Self::OPAQUE)
    }

    /// True when alpha is exactly the fully opaque value.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == Self::OPAQUE
    }

    /// Returns a copy with alpha multiplied by `opacity` (0–1).
    #[inline]
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { a: self.a * opacity, ..self }
    }

    /// Alpha on a 0–1 scale.
    #[inline]
    pub fn alpha_unit(self) -> f64 {
        self.a / Self::OPAQUE
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}
