//! Gradient conversion pipeline.
//!
//! Stages, in order:
//! 1. [`normalize`]: object space → normalized y-up space
//! 2. [`gradient_angle`]: CSS angle of the normalized vector
//! 3. [`edge_points`]: where the CSS gradient line crosses the box
//! 4. [`remap_offset`]: stop offsets re-measured along that line
//! 5. [`composite`]: shape opacity applied, color rendered as CSS
//!
//! Every stage is a pure function; a conversion holds no state between calls.

mod angle;
mod composite;
mod edges;
mod normalize;
mod remap;

pub use angle::gradient_angle;
pub use composite::composite;
pub use edges::{edge_points, line_intersection, EdgePoints, Quadrant};
pub use normalize::normalize;
pub use remap::remap_offset;

use crate::error::{ConvertError, Degeneracy};
use crate::paint::LinearGradient;
use crate::shape::{ConversionOptions, SelectedShape, ShapeContext};

/// A stop ready for CSS output.
#[derive(Debug, Clone, PartialEq)]
pub struct CssStop {
    /// Fraction of the CSS gradient line; may fall outside [0, 1].
    pub offset: f64,
    /// `#rrggbb` or `rgba(r, g, b, a)`.
    pub color: String,
}

/// Result of converting one gradient.
///
/// `angle` already includes the shape's rotation and is deliberately not
/// wrapped back into [0, 360). `Display` renders the `linear-gradient()`
/// expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub angle: f64,
    pub stops: Vec<CssStop>,
}

/// Converts `gradient` for a shape described by `ctx`.
pub fn convert(gradient: &LinearGradient, ctx: &ShapeContext) -> Result<Conversion, ConvertError> {
    if gradient.stops.is_empty() {
        return Err(ConvertError::InapplicableInput);
    }
    if !gradient.is_finite() || !ctx.rotation.is_finite() || !ctx.opacity.is_finite() {
        return Err(Degeneracy::NonFinite.into());
    }
    if gradient.is_zero_length() {
        return Err(Degeneracy::ZeroLengthVector.into());
    }

    let (p1, p2) = normalize(gradient.start, gradient.end, ctx.size)?;
    let angle = gradient_angle(p1, p2);
    if !angle.is_finite() {
        return Err(Degeneracy::NonFinite.into());
    }
    let edges = edge_points(p1, p2, angle, ctx.size.aspect())?;
    log::debug!("normalized {p1:?} -> {p2:?}, angle {angle}, edges {edges:?}");

    let stops = gradient
        .stops
        .iter()
        .map(|stop| -> Result<CssStop, Degeneracy> {
            let mut out = composite(stop, ctx.opacity);
            out.offset = remap_offset(stop.offset, p1, p2, edges)?;
            log::trace!("stop {} -> {} {}", stop.offset, out.offset, out.color);
            Ok(out)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Conversion { angle: angle + ctx.rotation, stops })
}

/// Converts the fill of a host shape.
///
/// Fails with [`ConvertError::InapplicableInput`] before reading any attribute
/// when the shape carries no linear gradient with stops.
pub fn convert_shape<S>(shape: &S, options: ConversionOptions) -> Result<Conversion, ConvertError>
where
    S: SelectedShape + ?Sized,
{
    let fill = shape.fill().ok_or(ConvertError::InapplicableInput)?;
    let gradient = fill.as_linear_gradient().ok_or(ConvertError::InapplicableInput)?;
    let ctx = ShapeContext::resolve(shape, options)?;
    convert(gradient, &ctx)
}
