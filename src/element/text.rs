use super::props::{ElementProps, FillProps, StrokeProps};
use crate::foundation::json::JsonObject;
use crate::properties::constants::{
    FlowDirection, TextTransform, TranscriptEffect, TranscriptPlacement, TranscriptSplit,
};
use crate::properties::text::{Font, TextBackground};
use crate::properties::value::{Prop, Scalar};

/// Text block.
///
/// `font`, `text_background` and `background` are hoisted into `font_*` and `background_*`
/// fields. Explicit fields such as `font_family` are written afterwards and take precedence;
/// `background` takes precedence over `text_background`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    /// Properties shared by every element.
    pub base: ElementProps,
    /// Content. Always emitted.
    pub text: String,
    /// Family, weight and style in one value.
    pub font: Option<Font>,
    /// Font family name.
    pub font_family: Option<String>,
    /// Font size. Unset means fit to the element box.
    pub font_size: Option<Prop<Scalar>>,
    /// 100 to 900.
    pub font_weight: Option<Prop<i64>>,
    /// `normal` or `italic`.
    pub font_style: Option<String>,
    /// Case conversion applied before rendering.
    pub text_transform: Option<TextTransform>,
    /// Percentage of the font size.
    pub line_height: Option<Prop<Scalar>>,
    /// Extra spacing between characters.
    pub letter_spacing: Option<Prop<Scalar>>,
    /// Text color.
    pub color: Option<Prop<String>>,
    /// Highlight drawn behind each line.
    pub text_background: Option<TextBackground>,
    /// Background drawn behind the whole text.
    pub background: Option<TextBackground>,
    /// Fill color and mode.
    pub fill: FillProps,
    /// Outline.
    pub stroke: StrokeProps,
    /// Horizontal or vertical text flow.
    pub flow_direction: Option<FlowDirection>,
    /// Wrap onto multiple lines.
    pub wrap: Option<bool>,
    /// How spoken words are highlighted.
    pub transcript_effect: Option<TranscriptEffect>,
    /// How much of the transcript is visible at once.
    pub transcript_placement: Option<TranscriptPlacement>,
    /// Unit the transcript is split into.
    pub transcript_split: Option<TranscriptSplit>,
    /// Maximum characters per transcript line.
    pub transcript_maximum_length: Option<u32>,
}

impl Text {
    /// Text element showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub(super) fn write(&self, obj: &mut JsonObject) {
        if let Some(font) = &self.font {
            obj.extend(font.flatten());
        }
        if let Some(bg) = &self.text_background {
            obj.extend(bg.flatten());
        }
        if let Some(bg) = &self.background {
            obj.extend(bg.flatten());
        }

        obj.set("text", &self.text)
            .opt("font_family", &self.font_family)
            .opt("font_size", &self.font_size)
            .opt("font_weight", &self.font_weight)
            .opt("font_style", &self.font_style)
            .opt("text_transform", &self.text_transform)
            .opt("line_height", &self.line_height)
            .opt("letter_spacing", &self.letter_spacing)
            .opt("color", &self.color);
        self.fill.write(obj);
        self.stroke.write(obj);
        obj.opt("flow_direction", &self.flow_direction)
            .opt("wrap", &self.wrap)
            .opt("transcript_effect", &self.transcript_effect)
            .opt("transcript_placement", &self.transcript_placement)
            .opt("transcript_split", &self.transcript_split)
            .opt("transcript_maximum_length", &self.transcript_maximum_length);
    }
}
