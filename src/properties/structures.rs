//! Compound property records serialized inline, as a nested object under their own key.

use crate::foundation::json::{JsonObject, ToJson};
use crate::properties::constants::{BlurMode, FillMode, StrokeCap, StrokeJoin, WarpMode};
use crate::properties::value::{Prop, Scalar};
use serde_json::Value;

/// Color of a fill: a single color or a list of gradient stops.
#[derive(Clone, Debug, PartialEq)]
pub enum FillColor {
    /// Any CSS color string.
    Solid(String),
    /// Gradient stops, used with [`FillMode::Linear`] and [`FillMode::Radial`].
    Gradient(Vec<FillColorStop>),
}

impl ToJson for FillColor {
    fn to_json(&self) -> Value {
        match self {
            Self::Solid(color) => Value::String(color.clone()),
            Self::Gradient(stops) => stops.to_json(),
        }
    }
}

impl From<&str> for FillColor {
    fn from(v: &str) -> Self {
        Self::Solid(v.to_owned())
    }
}

impl From<String> for FillColor {
    fn from(v: String) -> Self {
        Self::Solid(v)
    }
}

impl From<Vec<FillColorStop>> for FillColor {
    fn from(stops: Vec<FillColorStop>) -> Self {
        Self::Gradient(stops)
    }
}

impl From<&str> for Prop<FillColor> {
    fn from(v: &str) -> Self {
        Self::Value(v.into())
    }
}

impl From<String> for Prop<FillColor> {
    fn from(v: String) -> Self {
        Self::Value(v.into())
    }
}

impl From<Vec<FillColorStop>> for Prop<FillColor> {
    fn from(stops: Vec<FillColorStop>) -> Self {
        Self::Value(stops.into())
    }
}

/// One gradient stop.
#[derive(Clone, Debug, PartialEq)]
pub struct FillColorStop {
    /// Position along the gradient, `0..=1`.
    pub offset: f64,
    /// Color at `offset`.
    pub color: String,
}

impl FillColorStop {
    /// Create a stop at `offset`.
    pub fn new(offset: f64, color: impl Into<String>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

impl ToJson for FillColorStop {
    fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        obj.set("offset", &self.offset).set("color", &self.color);
        Value::Object(obj.finish())
    }
}

/// Fill of shapes, text and the document background.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fill {
    /// Fill method.
    pub mode: Option<FillMode>,
    /// Solid color or gradient stops.
    pub color: Option<FillColor>,
    /// Gradient start, x axis.
    pub x0: Option<Scalar>,
    /// Gradient start, y axis.
    pub y0: Option<Scalar>,
    /// Gradient end, x axis.
    pub x1: Option<Scalar>,
    /// Gradient end, y axis.
    pub y1: Option<Scalar>,
    /// Radius of a radial gradient.
    pub radius: Option<Scalar>,
}

impl ToJson for Fill {
    fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        obj.opt("mode", &self.mode)
            .opt("color", &self.color)
            .opt("x0", &self.x0)
            .opt("y0", &self.y0)
            .opt("x1", &self.x1)
            .opt("y1", &self.y1)
            .opt("radius", &self.radius);
        Value::Object(obj.finish())
    }
}

/// Drop shadow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shadow {
    /// Shadow color.
    pub color: Option<String>,
    /// Offset on the x axis.
    pub offset_x: Option<Scalar>,
    /// Offset on the y axis.
    pub offset_y: Option<Scalar>,
    /// Blur radius.
    pub blur: Option<Scalar>,
}

impl ToJson for Shadow {
    fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        obj.opt("color", &self.color)
            .opt("offset_x", &self.offset_x)
            .opt("offset_y", &self.offset_y)
            .opt("blur", &self.blur);
        Value::Object(obj.finish())
    }
}

/// Outline of shapes, text and media.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Option<String>,
    /// Stroke width.
    pub width: Option<Scalar>,
    /// Line cap.
    pub cap: Option<StrokeCap>,
    /// Line join.
    pub join: Option<StrokeJoin>,
}

impl ToJson for Stroke {
    fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        obj.opt("color", &self.color)
            .opt("width", &self.width)
            .opt("cap", &self.cap)
            .opt("join", &self.join);
        Value::Object(obj.finish())
    }
}

/// Blur applied to an element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Blur {
    /// Blur algorithm.
    pub mode: Option<BlurMode>,
    /// Blur strength.
    pub amount: Option<f64>,
    /// Angle of a motion blur, in degrees.
    pub angle: Option<f64>,
}

impl ToJson for Blur {
    fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        obj.opt("mode", &self.mode)
            .opt("amount", &self.amount)
            .opt("angle", &self.angle);
        Value::Object(obj.finish())
    }
}

/// Control point of a warp.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WarpPoint {
    /// Horizontal offset of the control point.
    pub x: f64,
    /// Vertical offset of the control point.
    pub y: f64,
}

impl WarpPoint {
    /// Create a control point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl ToJson for WarpPoint {
    fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        obj.set("x", &self.x).set("y", &self.y);
        Value::Object(obj.finish())
    }
}

/// Warp distortion. `mode` is always emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct Warp {
    /// Warp shape.
    pub mode: WarpMode,
    /// Warp strength.
    pub amount: Option<f64>,
    /// Control points.
    pub points: Vec<WarpPoint>,
}

impl Warp {
    /// Warp of the given shape with no amount or control points.
    pub fn new(mode: WarpMode) -> Self {
        Self {
            mode,
            amount: None,
            points: Vec::new(),
        }
    }
}

impl ToJson for Warp {
    fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        obj.set("mode", &self.mode)
            .opt("amount", &self.amount)
            .list("points", &self.points);
        Value::Object(obj.finish())
    }
}

/// Custom font made available to the whole document.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDefinition {
    /// Family name that text elements refer to.
    pub name: String,
    /// Where the service downloads the font file from.
    pub url: String,
}

impl FontDefinition {
    /// Register `url` under the family `name`.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl ToJson for FontDefinition {
    fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        obj.set("name", &self.name).set("url", &self.url);
        Value::Object(obj.finish())
    }
}

macro_rules! prop_from_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Prop<$ty> {
                fn from(v: $ty) -> Self {
                    Self::Value(v)
                }
            }
        )+
    };
}

prop_from_record!(Fill, FillColor, Shadow, Stroke, Blur, Warp, Vec<Vec<WarpPoint>>);

#[cfg(test)]
#[path = "../../tests/unit/properties/structures.rs"]
mod tests;
