//! CSS text output.
//!
//! Numbers follow the host's display rules: rounded half-up to two decimals
//! and printed in shortest form (`180`, `33.33`). Only the `rgba()` alpha
//! keeps a fixed two-decimal width.

use std::fmt;

use crate::convert::Conversion;
use crate::paint::Color;

/// Rounds half-up to two decimal places.
#[inline]
pub fn round(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Displays a number rounded to two decimals without trailing zeros.
#[derive(Debug, Copy, Clone)]
pub struct Rounded(pub f64);

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `+ 0.0` folds -0 into 0.
        write!(f, "{}", round(self.0) + 0.0)
    }
}

/// `#rrggbb` from explicit channels; alpha is ignored.
///
/// Channels are rounded to the nearest integer and clamped to 0–255.
pub fn hex(r: f64, g: f64, b: f64) -> String {
    fn channel(v: f64) -> u8 {
        v.round().clamp(0.0, 255.0) as u8
    }
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// `rgba(r, g, b, a)` with `alpha` on a 0–1 scale.
pub fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> String {
    format!(
        "rgba({}, {}, {}, {:.2})",
        Rounded(r),
        Rounded(g),
        Rounded(b),
        round(alpha) + 0.0
    )
}

/// Hex when fully opaque, `rgba()` otherwise.
pub fn color(c: Color) -> String {
    if c.is_opaque() {
        hex(c.r, c.g, c.b)
    } else {
        rgba(c.r, c.g, c.b, c.alpha_unit())
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}deg", Rounded(self.angle))?;
        for stop in &self.stops {
            write!(f, ", {} {}%", stop.color, Rounded(stop.offset * 100.0))?;
        }
        f.write_str(")")
    }
}
