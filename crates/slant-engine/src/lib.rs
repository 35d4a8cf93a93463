//! Slant engine crate.
//!
//! Converts a design tool's linear gradient (two object-space endpoints plus
//! color stops) into a CSS `linear-gradient()` expression.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, `Size`, `Rect` |
//! | [`paint`] | `Color`, `ColorStop`, `LinearGradient`, `Paint` |
//! | [`shape`] | `SelectedShape`, `ConversionOptions`, `ShapeContext` |
//! | [`convert`] | the conversion pipeline, `Conversion` |
//! | [`css`] | number and color formatting |
//! | [`error`] | `ConvertError` |
//!
//! # Quick start
//!
//! ```rust
//! use slant_engine::coords::Vec2;
//! use slant_engine::paint::{Color, ColorStop, LinearGradient};
//! use slant_engine::shape::ShapeContext;
//!
//! let gradient = LinearGradient::new(
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(1.0, 0.0),
//!     vec![
//!         ColorStop::new(0.0, Color::rgb(255.0, 0.0, 0.0)),
//!         ColorStop::new(1.0, Color::rgb(0.0, 0.0, 255.0)),
//!     ],
//! );
//!
//! let css = slant_engine::convert(&gradient, &ShapeContext::identity()).unwrap();
//! assert_eq!(css.to_string(), "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)");
//! ```

pub mod coords;
pub mod convert;
pub mod css;
pub mod error;
pub mod paint;
pub mod shape;

pub mod logging;

pub use convert::{convert, convert_shape, Conversion, CssStop};
pub use error::{Attribute, ConvertError, Degeneracy};
