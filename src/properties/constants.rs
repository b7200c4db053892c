//! Enumerated property constants. Wire names are the kebab-case variant names.

use crate::foundation::json::ToJson;
use crate::properties::value::Prop;
use serde::{Deserialize, Serialize};
use serde_json::Value;

macro_rules! serde_literal {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToJson for $ty {
                fn to_json(&self) -> Value {
                    serde_json::to_value(self).unwrap_or(Value::Null)
                }
            }

            impl From<$ty> for Prop<$ty> {
                fn from(v: $ty) -> Self {
                    Self::Value(v)
                }
            }
        )+
    };
}

serde_literal!(
    OutputFormat,
    GifQuality,
    EmojiStyle,
    BlendMode,
    FillMode,
    Fit,
    TextTransform,
    StrokeCap,
    StrokeJoin,
    FlowDirection,
    MaskMode,
    BlurMode,
    ColorFilter,
    TranscriptEffect,
    TranscriptPlacement,
    TranscriptSplit,
    WarpMode,
    Easing,
    Direction,
    SpinDirection,
    TextSplit,
);

/// Output file format of a render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// JPEG still image.
    Jpg,
    /// PNG still image.
    Png,
    /// Animated GIF.
    Gif,
    /// H.264 MP4 video.
    #[default]
    Mp4,
}

/// GIF encoder quality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GifQuality {
    /// Quicker encode, larger file.
    Fast,
    /// Slower encode, smaller file.
    Best,
}

/// Emoji artwork used in text elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmojiStyle {
    /// Facebook emoji set.
    Facebook,
    /// Google Noto emoji set.
    Google,
    /// Twemoji set.
    Twitter,
    /// Apple emoji set.
    Apple,
}

/// How an element is blended with the layers below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    /// `normal`.
    Normal,
    /// `multiply`.
    Multiply,
    /// `screen`.
    Screen,
    /// `overlay`.
    Overlay,
    /// `darken`.
    Darken,
    /// `lighten`.
    Lighten,
    /// `color-dodge`.
    ColorDodge,
    /// `color-burn`.
    ColorBurn,
    /// `hard-light`.
    HardLight,
    /// `soft-light`.
    SoftLight,
    /// `difference`.
    Difference,
    /// `exclusion`.
    Exclusion,
    /// `hue`.
    Hue,
    /// `saturation`.
    Saturation,
    /// `color`.
    Color,
    /// `luminosity`.
    Luminosity,
}

/// Fill method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillMode {
    /// Single color.
    Solid,
    /// Linear gradient between `fill_x0/y0` and `fill_x1/y1`.
    Linear,
    /// Radial gradient of `fill_radius`.
    Radial,
}

/// How media is resized to fit its element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fit {
    /// Stretch to the element box.
    Fill,
    /// Scale to fit inside, keeping the aspect ratio.
    Contain,
    /// Scale to cover the box, cropping the overflow.
    Cover,
    /// Keep the original size.
    None,
}

/// Case conversion applied to text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextTransform {
    /// Leave text as written.
    None,
    /// ALL CAPS.
    Uppercase,
    /// all lowercase.
    Lowercase,
    /// First Letter Of Each Word.
    Capitalize,
}

/// Shape drawn at the ends of open paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeCap {
    /// Flat end at the path end.
    Butt,
    /// Half circle past the path end.
    Round,
    /// Half square past the path end.
    Square,
}

/// Shape drawn where path segments meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeJoin {
    /// Sharp corner.
    Miter,
    /// Rounded corner.
    Round,
    /// Cut-off corner.
    Bevel,
}

/// Direction in which text runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowDirection {
    /// Latin scripts.
    LeftToRight,
    /// Arabic and Hebrew scripts.
    RightToLeft,
}

/// Turns an element into a mask for the elements below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskMode {
    /// Mask by the element's opacity.
    Alpha,
    /// Mask by the element's brightness.
    Luminance,
    /// Mask by the inverse of the element's opacity.
    Inverted,
}

/// Blur algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlurMode {
    /// Uniform blur.
    Gaussian,
    /// Blur along the direction of movement.
    Motion,
}

/// Color filter applied to an element; tuned with `color_filter_value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorFilter {
    /// `grayscale`.
    Grayscale,
    /// `sepia`.
    Sepia,
    /// `invert`.
    Invert,
    /// `brightness`.
    Brightness,
    /// `contrast`.
    Contrast,
    /// `saturate`.
    Saturate,
    /// `hue-rotate`.
    HueRotate,
}

/// How the currently spoken words are highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranscriptEffect {
    /// Color the current word.
    Highlight,
    /// Sweep color across the words as they are spoken.
    Karaoke,
}

/// Which part of a transcript is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranscriptPlacement {
    /// Keep the current word centered.
    Center,
    /// Keep the current line at the bottom.
    Bottom,
}

/// Unit a transcript is broken into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranscriptSplit {
    /// One word at a time.
    Word,
    /// One line at a time.
    Line,
    /// The whole transcript at once.
    None,
}

/// Deformation applied with `warp_matrix`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarpMode {
    /// `arc`.
    Arc,
    /// `arch`.
    Arch,
    /// `bulge`.
    Bulge,
    /// `flag`.
    Flag,
    /// `wave`.
    Wave,
    /// `fish`.
    Fish,
    /// `rise`.
    Rise,
    /// `fisheye`.
    Fisheye,
}

/// Easing curve applied toward the next keyframe, or over an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// `linear`.
    Linear,
    /// `ease`.
    Ease,
    /// `ease-in`.
    EaseIn,
    /// `ease-out`.
    EaseOut,
    /// `ease-in-out`.
    EaseInOut,
    /// `ease-in-quad`.
    EaseInQuad,
    /// `ease-out-quad`.
    EaseOutQuad,
    /// `ease-in-out-quad`.
    EaseInOutQuad,
    /// `elastic-in`.
    ElasticIn,
    /// `elastic-out`.
    ElasticOut,
    /// `elastic-in-out`.
    ElasticInOut,
    /// `bounce-in`.
    BounceIn,
    /// `bounce-out`.
    BounceOut,
    /// `bounce-in-out`.
    BounceInOut,
    /// `back-in`.
    BackIn,
    /// `back-out`.
    BackOut,
    /// `back-in-out`.
    BackInOut,
    /// `quadratic-in`.
    QuadraticIn,
    /// `quadratic-out`.
    QuadraticOut,
    /// `quadratic-in-out`.
    QuadraticInOut,
    /// `cubic-in`.
    CubicIn,
    /// `cubic-out`.
    CubicOut,
    /// `cubic-in-out`.
    CubicInOut,
    /// `quartic-in`.
    QuarticIn,
    /// `quartic-out`.
    QuarticOut,
    /// `quartic-in-out`.
    QuarticInOut,
    /// `quintic-in`.
    QuinticIn,
    /// `quintic-out`.
    QuinticOut,
    /// `quintic-in-out`.
    QuinticInOut,
    /// `exponential-in`.
    ExponentialIn,
    /// `exponential-out`.
    ExponentialOut,
    /// `exponential-in-out`.
    ExponentialInOut,
    /// `circular-in`.
    CircularIn,
    /// `circular-out`.
    CircularOut,
    /// `circular-in-out`.
    CircularInOut,
}

/// Direction of slide animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Toward the left edge.
    Left,
    /// Toward the right edge.
    Right,
    /// Toward the top edge.
    Up,
    /// Toward the bottom edge.
    Down,
}

/// Rotation direction of spin animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpinDirection {
    /// Clockwise.
    Clockwise,
    /// Counter-clockwise.
    Counterclockwise,
}

/// Unit that text animations are split into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextSplit {
    /// Animate each letter separately.
    Letter,
    /// Animate each word separately.
    Word,
    /// Animate each line separately.
    Line,
}

#[cfg(test)]
#[path = "../../tests/unit/properties/constants.rs"]
mod tests;
