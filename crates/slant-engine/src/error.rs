use std::fmt;

/// Shape attribute that can be folded into a conversion.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Attribute {
    /// Width and height (directly, or through local bounds).
    Size,
    Rotation,
    Opacity,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Attribute::Size => "width, height",
            Attribute::Rotation => "rotation",
            Attribute::Opacity => "opacity",
        })
    }
}

/// Geometry that leaves the conversion without a unique answer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Degeneracy {
    /// Gradient start and end coincide.
    ZeroLengthVector,
    /// Box width is zero, negative, or not finite; Y cannot be rescaled.
    ZeroWidth,
    /// A corner's perpendicular never meets the gradient line.
    ParallelLines,
    /// Input or an intermediate result is NaN or infinite.
    NonFinite,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Degeneracy::ZeroLengthVector => "gradient start and end are the same point",
            Degeneracy::ZeroWidth => "shape size must be positive and finite",
            Degeneracy::ParallelLines => "gradient line has no intersection with the box edge",
            Degeneracy::NonFinite => "gradient geometry is not finite",
        })
    }
}

/// Why a conversion produced no gradient.
///
/// Every failure is a deterministic function of the input; retrying with the
/// same input fails the same way.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ConvertError {
    /// An enabled attribute is not reported by the host.
    MissingAttribute(Attribute),
    DegenerateGeometry(Degeneracy),
    /// The shape has no linear gradient fill with color stops.
    InapplicableInput,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::MissingAttribute(attr) => write!(f, "can't get {attr}"),
            ConvertError::DegenerateGeometry(why) => write!(f, "degenerate gradient: {why}"),
            ConvertError::InapplicableInput => {
                f.write_str("nothing to convert: select a shape with a linear gradient fill")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<Degeneracy> for ConvertError {
    fn from(why: Degeneracy) -> Self {
        ConvertError::DegenerateGeometry(why)
    }
}
