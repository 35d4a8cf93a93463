use serde::Serialize;
use slant_engine::Conversion;

/// `--json` output.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub css: String,
    pub angle: f64,
    pub stops: Vec<JsonStop<'a>>,
}

#[derive(Debug, Serialize)]
pub struct JsonStop<'a> {
    /// Fraction of the CSS gradient line, unrounded.
    pub offset: f64,
    pub color: &'a str,
}

impl<'a> From<&'a Conversion> for JsonOutput<'a> {
    fn from(c: &'a Conversion) -> Self {
        Self {
            css: c.to_string(),
            angle: c.angle,
            stops: c
                .stops
                .iter()
                .map(|s| JsonStop { offset: s.offset, color: &s.color })
                .collect(),
        }
    }
}
