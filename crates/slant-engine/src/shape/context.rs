use crate::coords::Size;
use crate::error::{Attribute, ConvertError};

use super::{ConversionOptions, SelectedShape};

/// Shape attributes after the enable flags have been applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeContext {
    pub size: Size,
    /// Multiplier applied to every stop's alpha, 0–1.
    pub opacity: f64,
    /// Degrees added to the computed angle.
    pub rotation: f64,
}

impl ShapeContext {
    /// Identity context: unit square, fully opaque, unrotated.
    #[inline]
    pub const fn identity() -> Self {
        Self { size: Size::unit(), opacity: 1.0, rotation: 0.0 }
    }

    #[inline]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    #[inline]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[inline]
    pub const fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Reads the enabled attributes from `shape`.
    ///
    /// Attributes are queried in the order size, rotation, opacity; the first
    /// missing one is reported. Size falls back to the shape's local bounds.
    pub fn resolve<S>(shape: &S, options: ConversionOptions) -> Result<Self, ConvertError>
    where
        S: SelectedShape + ?Sized,
    {
        let mut ctx = Self::identity();

        if options.use_size {
            ctx.size = shape
                .size()
                .or_else(|| shape.local_bounds().map(|b| b.normalized().size))
                .ok_or(ConvertError::MissingAttribute(Attribute::Size))?;
        }
        if options.use_rotation {
            ctx.rotation = shape
                .rotation()
                .ok_or(ConvertError::MissingAttribute(Attribute::Rotation))?;
        }
        if options.use_opacity {
            ctx.opacity = shape
                .opacity()
                .ok_or(ConvertError::MissingAttribute(Attribute::Opacity))?;
        }

        log::debug!(
            "shape context: size={}x{} rotation={} opacity={}",
            ctx.size.width,
            ctx.size.height,
            ctx.rotation,
            ctx.opacity
        );
        Ok(ctx)
    }
}

impl Default for ShapeContext {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Paint;

    #[derive(Default)]
    struct Host {
        size: Option<Size>,
        bounds: Option<Rect>,
        rotation: Option<f64>,
        opacity: Option<f64>,
    }

    impl SelectedShape for Host {
        fn fill(&self) -> Option<Paint> { None }
        fn size(&self) -> Option<Size> { self.size }
        fn local_bounds(&self) -> Option<Rect> { self.bounds }
        fn rotation(&self) -> Option<f64> { self.rotation }
        fn opacity(&self) -> Option<f64> { self.opacity }
    }

    fn full_host() -> Host {
        Host {
            size: Some(Size::new(200.0, 100.0)),
            bounds: None,
            rotation: Some(30.0),
            opacity: Some(0.25),
        }
    }

    // ── flags off ─────────────────────────────────────────────────────────

    #[test]
    fn disabled_flags_give_identity() {
        let ctx = ShapeContext::resolve(&full_host(), ConversionOptions::new()).unwrap();
        assert_eq!(ctx, ShapeContext::identity());
    }

    #[test]
    fn disabled_flags_ignore_missing_attributes() {
        let ctx = ShapeContext::resolve(&Host::default(), ConversionOptions::new()).unwrap();
        assert_eq!(ctx, ShapeContext::identity());
    }

    // ── flags on ──────────────────────────────────────────────────────────

    #[test]
    fn enabled_flags_read_host() {
        let ctx = ShapeContext::resolve(&full_host(), ConversionOptions::all()).unwrap();
        assert_eq!(ctx.size, Size::new(200.0, 100.0));
        assert_eq!(ctx.rotation, 30.0);
        assert_eq!(ctx.opacity, 0.25);
    }

    #[test]
    fn size_falls_back_to_local_bounds() {
        let host = Host { bounds: Some(Rect::new(5.0, 5.0, -40.0, 10.0)), ..Host::default() };
        let ctx = ShapeContext::resolve(&host, ConversionOptions::new().with_size(true)).unwrap();
        assert_eq!(ctx.size, Size::new(40.0, 10.0));
    }

    #[test]
    fn direct_size_wins_over_bounds() {
        let host = Host {
            size: Some(Size::new(3.0, 4.0)),
            bounds: Some(Rect::new(0.0, 0.0, 9.0, 9.0)),
            ..Host::default()
        };
        let ctx = ShapeContext::resolve(&host, ConversionOptions::new().with_size(true)).unwrap();
        assert_eq!(ctx.size, Size::new(3.0, 4.0));
    }

    // ── missing attributes ────────────────────────────────────────────────

    #[test]
    fn missing_size_reported() {
        let err = ShapeContext::resolve(&Host::default(), ConversionOptions::new().with_size(true));
        assert_eq!(err, Err(ConvertError::MissingAttribute(Attribute::Size)));
    }

    #[test]
    fn missing_rotation_reported() {
        let err = ShapeContext::resolve(&Host::default(), ConversionOptions::new().with_rotation(true));
        assert_eq!(err, Err(ConvertError::MissingAttribute(Attribute::Rotation)));
    }

    #[test]
    fn missing_opacity_reported() {
        let err = ShapeContext::resolve(&Host::default(), ConversionOptions::new().with_opacity(true));
        assert_eq!(err, Err(ConvertError::MissingAttribute(Attribute::Opacity)));
    }

    #[test]
    fn first_missing_attribute_wins() {
        let host = Host { size: Some(Size::unit()), ..Host::default() };
        let err = ShapeContext::resolve(&host, ConversionOptions::all());
        assert_eq!(err, Err(ConvertError::MissingAttribute(Attribute::Rotation)));
    }
}
