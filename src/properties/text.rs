//! Records that are hoisted into their parent under a key prefix instead of nesting.
//!
//! A `Font` becomes `font_*` siblings and a `TextBackground` becomes `background_*` siblings.
//! Each type has one primary field that is emitted even when empty.

use crate::foundation::json::JsonObject;
use crate::properties::value::Scalar;
use serde_json::{Map, Value};

/// Font settings of a text element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Font {
    /// Font family. Always emitted as `font_family`.
    pub family: String,
    /// Weight, 100 to 900.
    pub weight: Option<i64>,
    /// `normal` or `italic`.
    pub style: Option<String>,
    /// Fixed size; leave unset to let the text auto-size.
    pub size: Option<Scalar>,
    /// Lower bound when auto-sizing.
    pub minimum: Option<Scalar>,
    /// Upper bound when auto-sizing.
    pub maximum: Option<Scalar>,
}

impl Font {
    /// Font of `family` at the given weight.
    pub fn new(family: impl Into<String>, weight: i64) -> Self {
        Self {
            family: family.into(),
            weight: Some(weight),
            ..Self::default()
        }
    }

    /// Prefixed sibling fields for the owning element.
    pub fn flatten(&self) -> Map<String, Value> {
        let mut obj = JsonObject::new();
        obj.set("font_family", &self.family)
            .opt("font_weight", &self.weight)
            .opt("font_style", &self.style)
            .opt("font_size", &self.size)
            .opt("font_size_minimum", &self.minimum)
            .opt("font_size_maximum", &self.maximum);
        obj.finish()
    }
}

/// Highlight box drawn behind text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextBackground {
    /// Box color. Always emitted as `background_color`.
    pub color: String,
    /// Horizontal padding.
    pub x_padding: Option<Scalar>,
    /// Vertical padding.
    pub y_padding: Option<Scalar>,
    /// Corner radius.
    pub border_radius: Option<Scalar>,
    /// How far line boxes may differ in width before they are drawn separately.
    pub align_threshold: Option<Scalar>,
}

impl TextBackground {
    /// Background of the given color with no padding or rounding.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }

    /// Background with every field set, in the order the service documents them.
    pub fn with_padding(
        color: impl Into<String>,
        x_padding: impl Into<Scalar>,
        y_padding: impl Into<Scalar>,
        border_radius: impl Into<Scalar>,
        align_threshold: impl Into<Scalar>,
    ) -> Self {
        Self {
            color: color.into(),
            x_padding: Some(x_padding.into()),
            y_padding: Some(y_padding.into()),
            border_radius: Some(border_radius.into()),
            align_threshold: Some(align_threshold.into()),
        }
    }

    /// Prefixed sibling fields for the owning element.
    pub fn flatten(&self) -> Map<String, Value> {
        let mut obj = JsonObject::new();
        obj.set("background_color", &self.color)
            .opt("background_x_padding", &self.x_padding)
            .opt("background_y_padding", &self.y_padding)
            .opt("background_border_radius", &self.border_radius)
            .opt("background_align_threshold", &self.align_threshold);
        obj.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/properties/text.rs"]
mod tests;
