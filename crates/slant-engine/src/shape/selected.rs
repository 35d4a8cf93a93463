use crate::coords::{Rect, Size};
use crate::paint::Paint;

/// Capability query implemented by hosts for the currently selected shape.
///
/// Each attribute is optional: a host returns `None` for anything the shape
/// does not expose. Which `None` turns into an error depends on the
/// [`ConversionOptions`](super::ConversionOptions) in effect.
pub trait SelectedShape {
    /// The shape's fill, if it has one.
    fn fill(&self) -> Option<Paint>;

    /// Width and height reported directly on the shape.
    fn size(&self) -> Option<Size>;

    /// Local bounds; consulted for the size when [`size`](Self::size) is absent.
    fn local_bounds(&self) -> Option<Rect> {
        None
    }

    /// Rotation in degrees, clockwise.
    fn rotation(&self) -> Option<f64>;

    /// Opacity in [0, 1].
    fn opacity(&self) -> Option<f64>;
}
