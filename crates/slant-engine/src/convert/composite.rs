use crate::css;
use crate::paint::ColorStop;

use super::CssStop;

/// Applies the shape's opacity to `stop` and renders its color as CSS text.
///
/// The offset is carried through untouched.
pub fn composite(stop: &ColorStop, opacity: f64) -> CssStop {
    CssStop {
        offset: stop.offset,
        color: css::color(stop.color.with_opacity(opacity)),
    }
}
