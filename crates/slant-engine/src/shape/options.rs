/// Selects which shape attributes are folded into a conversion.
///
/// A disabled attribute takes its identity value (unit size, no rotation,
/// full opacity) whatever the host reports. Everything is off by default.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ConversionOptions {
    pub use_size: bool,
    pub use_rotation: bool,
    pub use_opacity: bool,
}

impl ConversionOptions {
    #[inline]
    pub const fn new() -> Self {
        Self { use_size: false, use_rotation: false, use_opacity: false }
    }

    /// All three attributes enabled.
    #[inline]
    pub const fn all() -> Self {
        Self { use_size: true, use_rotation: true, use_opacity: true }
    }

    #[inline]
    pub const fn with_size(mut self, on: bool) -> Self {
        self.use_size = on;
        self
    }

    #[inline]
    pub const fn with_rotation(mut self, on: bool) -> Self {
        self.use_rotation = on;
        self
    }

    #[inline]
    pub const fn with_opacity(mut self, on: bool) -> Self {
        self.use_opacity = on;
        self
    }
}
