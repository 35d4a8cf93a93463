//! Coordinate and geometry types shared by the conversion pipeline.
//!
//! Two spaces are in play:
//! - object space: the design tool's gradient space, +X right, +Y down,
//!   one unit spans the shape's width on X and its height on Y
//! - normalized space: +Y up, Y rescaled by `height / width` so that one
//!   unit measures the same distance on both axes
//!
//! Values are `f64` throughout; the conversion must agree with hosts that do
//! their arithmetic in double precision.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
