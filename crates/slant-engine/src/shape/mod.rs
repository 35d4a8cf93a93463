//! Host-facing shape model.
//!
//! The host reports what it knows about the selected shape through
//! [`SelectedShape`]; [`ShapeContext::resolve`] folds the enabled attributes
//! into the values the pipeline consumes.

mod context;
mod options;
mod selected;

pub use context::ShapeContext;
pub use options::ConversionOptions;
pub use selected::SelectedShape;
