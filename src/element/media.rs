use super::props::{ElementProps, StrokeProps};
use crate::foundation::json::JsonObject;
use crate::properties::constants::Fit;
use crate::properties::value::{Prop, Scalar};

/// Video clip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Video {
    /// Properties shared by every element.
    pub base: ElementProps,
    /// URL of the video file. Always emitted.
    pub source: String,
    /// Third-party platform used to generate the video instead of downloading it.
    pub provider: Option<String>,
    /// Start offset into the source, in seconds.
    pub trim_start: Option<Prop<Scalar>>,
    /// Length of the source to play.
    pub trim_duration: Option<Prop<Scalar>>,
    /// Restart when the end is reached.
    pub r#loop: Option<bool>,
    /// Volume, `0%` to `100%`. May be keyframed.
    pub volume: Option<Prop<Scalar>>,
    /// Seconds to fade the audio in from silence.
    pub audio_fade_in: Option<Prop<Scalar>>,
    /// Seconds to fade the audio out to silence.
    pub audio_fade_out: Option<Prop<Scalar>>,
    /// How the media is scaled into the element's box.
    pub fit: Option<Fit>,
    /// Outline around the media.
    pub stroke: StrokeProps,
    /// Corner rounding.
    pub border_radius: Option<Prop<Scalar>>,
}

impl Video {
    /// Video element playing `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub(super) fn write(&self, obj: &mut JsonObject) {
        obj.set("source", &self.source)
            .opt("provider", &self.provider)
            .opt("trim_start", &self.trim_start)
            .opt("trim_duration", &self.trim_duration)
            .opt("loop", &self.r#loop)
            .opt("volume", &self.volume)
            .opt("audio_fade_in", &self.audio_fade_in)
            .opt("audio_fade_out", &self.audio_fade_out)
            .opt("fit", &self.fit);
        self.stroke.write(obj);
        obj.opt("border_radius", &self.border_radius);
    }
}

/// Still image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Image {
    /// Properties shared by every element.
    pub base: ElementProps,
    /// URL of the image file. Always emitted.
    pub source: String,
    /// Third-party platform used to generate the image instead of downloading it.
    pub provider: Option<String>,
    /// How the media is scaled into the element's box.
    pub fit: Option<Fit>,
    /// Outline around the media.
    pub stroke: StrokeProps,
    /// Corner rounding.
    pub border_radius: Option<Prop<Scalar>>,
}

impl Image {
    /// Image element showing `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub(super) fn write(&self, obj: &mut JsonObject) {
        obj.set("source", &self.source)
            .opt("provider", &self.provider)
            .opt("fit", &self.fit);
        self.stroke.write(obj);
        obj.opt("border_radius", &self.border_radius);
    }
}

/// Audio track.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Audio {
    /// Properties shared by every element.
    pub base: ElementProps,
    /// URL of the audio file. Always emitted.
    pub source: String,
    /// Start offset into the source, in seconds.
    pub trim_start: Option<Prop<Scalar>>,
    /// Length of the source to play.
    pub trim_duration: Option<Prop<Scalar>>,
    /// Restart when the end is reached.
    pub r#loop: Option<bool>,
    /// Volume, `0%` to `100%`. May be keyframed.
    pub volume: Option<Prop<Scalar>>,
    /// Seconds to fade the audio in from silence.
    pub audio_fade_in: Option<Prop<Scalar>>,
    /// Seconds to fade the audio out to silence.
    pub audio_fade_out: Option<Prop<Scalar>>,
}

impl Audio {
    /// Audio element playing `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub(super) fn write(&self, obj: &mut JsonObject) {
        obj.set("source", &self.source)
            .opt("trim_start", &self.trim_start)
            .opt("trim_duration", &self.trim_duration)
            .opt("loop", &self.r#loop)
            .opt("volume", &self.volume)
            .opt("audio_fade_in", &self.audio_fade_in)
            .opt("audio_fade_out", &self.audio_fade_out);
    }
}
