//! The top-level document submitted for rendering.

use crate::element::Element;
use crate::foundation::json::{JsonObject, ToJson};
use crate::properties::constants::{EmojiStyle, FillMode, GifQuality, OutputFormat};
use crate::properties::structures::{Fill, FillColor, FontDefinition};
use crate::properties::value::{Prop, Scalar};
use serde_json::{Map, Value};

/// Output settings plus the ordered list of elements to render.
///
/// Serialization is deterministic: object keys are emitted in sorted order, unset fields are
/// omitted, and `elements` keeps the order given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Source {
    /// Always emitted.
    pub output_format: OutputFormat,
    /// Constant rate factor for MP4 output, 17 to 51.
    pub crf: Option<u32>,
    /// Encoder quality preset for GIF output.
    pub gif_quality: Option<GifQuality>,
    /// GIF compression level, 0 to 200.
    pub gif_compression: Option<u32>,
    /// Output width in pixels.
    pub width: Option<u32>,
    /// Output height in pixels.
    pub height: Option<u32>,
    /// Frames per second.
    pub frame_rate: Option<f64>,
    /// Output duration in seconds. Derived from the elements when unset.
    pub duration: Option<f64>,
    /// Repeat GIF output.
    pub r#loop: Option<bool>,
    /// Time in seconds at which a snapshot image is taken.
    pub snapshot_time: Option<f64>,
    /// Emoji glyph set.
    pub emoji_style: Option<EmojiStyle>,

    /// Background fill.
    pub fill: Option<Prop<Fill>>,
    /// Background color or gradient stops.
    pub fill_color: Option<Prop<FillColor>>,
    /// Solid or gradient fill.
    pub fill_mode: Option<Prop<FillMode>>,
    /// Gradient start, x.
    pub fill_x0: Option<Prop<Scalar>>,
    /// Gradient start, y.
    pub fill_y0: Option<Prop<Scalar>>,
    /// Gradient end, x.
    pub fill_x1: Option<Prop<Scalar>>,
    /// Gradient end, y.
    pub fill_y1: Option<Prop<Scalar>>,
    /// Radius of a radial gradient.
    pub fill_radius: Option<Prop<Scalar>>,

    /// Custom fonts referenced by text elements.
    pub fonts: Vec<FontDefinition>,
    /// Elements, in order.
    pub elements: Vec<Element>,
}

impl Source {
    /// Document with the given output format and no elements.
    pub fn new(output_format: OutputFormat) -> Self {
        Self {
            output_format,
            ..Self::default()
        }
    }

    /// Append an element.
    pub fn push(&mut self, element: impl Into<Element>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    /// Serialize into the JSON object the service expects.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut obj = JsonObject::new();
        obj.set("output_format", &self.output_format)
            .opt("crf", &self.crf)
            .opt("gif_quality", &self.gif_quality)
            .opt("gif_compression", &self.gif_compression)
            .opt("width", &self.width)
            .opt("height", &self.height)
            .opt("frame_rate", &self.frame_rate)
            .opt("duration", &self.duration)
            .opt("loop", &self.r#loop)
            .opt("snapshot_time", &self.snapshot_time)
            .opt("emoji_style", &self.emoji_style)
            .opt("fill", &self.fill)
            .opt("fill_color", &self.fill_color)
            .opt("fill_mode", &self.fill_mode)
            .opt("fill_x0", &self.fill_x0)
            .opt("fill_y0", &self.fill_y0)
            .opt("fill_x1", &self.fill_x1)
            .opt("fill_y1", &self.fill_y1)
            .opt("fill_radius", &self.fill_radius)
            .list("fonts", &self.fonts)
            .list("elements", &self.elements);
        obj.finish()
    }
}

impl ToJson for Source {
    fn to_json(&self) -> Value {
        Value::Object(self.to_map())
    }
}

impl serde::Serialize for Source {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_map().serialize(serializer)
    }
}

impl<E: Into<Element>> Extend<E> for Source {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
#[path = "../tests/unit/source.rs"]
mod tests;
