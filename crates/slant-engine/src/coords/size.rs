/// Width and height of a shape's box, in the host's units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The unit square; the size used when size folding is disabled.
    #[inline]
    pub const fn unit() -> Self {
        Self::new(1.0, 1.0)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// `height / width`: the factor applied to object-space Y so both axes
    /// share a unit length.
    #[inline]
    pub fn aspect(self) -> f64 {
        self.height / self.width
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::unit()
    }
}
