//! JSON description of a selected shape.
//!
//! Mirrors what a design-tool host knows about its selection. Every
//! attribute is optional so the engine's missing-attribute reporting can be
//! driven from the command line.

use serde::Deserialize;
use slant_engine::coords::{Rect, Size, Vec2};
use slant_engine::paint::{Color, ColorStop, LinearGradient, Paint};
use slant_engine::shape::SelectedShape;

#[derive(Debug, Default, Deserialize)]
pub struct ShapeDocument {
    pub fill: Option<FillDocument>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub local_bounds: Option<RectDocument>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FillDocument {
    Solid { color: ColorDocument },
    Linear { start: PointDocument, end: PointDocument, stops: Vec<StopDocument> },
}

#[derive(Debug, Copy, Clone, Deserialize)]
pub struct PointDocument {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Copy, Clone, Deserialize)]
pub struct RectDocument {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Copy, Clone, Deserialize)]
pub struct ColorDocument {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    Color::OPAQUE
}

#[derive(Debug, Copy, Clone, Deserialize)]
pub struct StopDocument {
    pub offset: f64,
    pub color: ColorDocument,
}

impl From<PointDocument> for Vec2 {
    fn from(p: PointDocument) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<ColorDocument> for Color {
    fn from(c: ColorDocument) -> Self {
        Color::rgba(c.r, c.g, c.b, c.a)
    }
}

impl From<&FillDocument> for Paint {
    fn from(fill: &FillDocument) -> Self {
        match fill {
            FillDocument::Solid { color } => Paint::solid((*color).into()),
            FillDocument::Linear { start, end, stops } => Paint::LinearGradient(LinearGradient::new(
                (*start).into(),
                (*end).into(),
                stops.iter().map(|s| ColorStop::new(s.offset, s.color.into())).collect(),
            )),
        }
    }
}

impl SelectedShape for ShapeDocument {
    fn fill(&self) -> Option<Paint> {
        self.fill.as_ref().map(Paint::from)
    }

    fn size(&self) -> Option<Size> {
        Some(Size::new(self.width?, self.height?))
    }

    fn local_bounds(&self) -> Option<Rect> {
        self.local_bounds.map(|b| Rect::new(b.x, b.y, b.width, b.height))
    }

    fn rotation(&self) -> Option<f64> {
        self.rotation
    }

    fn opacity(&self) -> Option<f64> {
        self.opacity
    }
}
