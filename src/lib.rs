//! Typed Rust client for the Creatomate video rendering API.
//!
//! A render is described by a [`Source`]: output settings plus an ordered list of
//! [`Element`]s, each carrying typed properties and [`Animation`]s. The document is converted
//! into the JSON tree the service expects with [`ToJson`] (or `serde_json::to_string`), then
//! submitted through a [`Client`]:
//!
//! - [`Client::submit`] starts a render and returns immediately
//! - [`Client::fetch`] reads the current state of a render
//! - [`Client::render`] submits and polls until every render finished or the wait timed out
//!
//! Serialization is infallible and deterministic. Only the client returns errors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod properties;

/// Animation descriptors.
pub mod animation;
/// Asynchronous API client.
pub mod client;
/// Timeline elements.
pub mod element;
/// Render resource and request options.
pub mod render;
/// Top-level document.
pub mod source;

pub use crate::foundation::error::{Error, Result, WaitError};
pub use crate::foundation::json::ToJson;

pub use crate::properties::constants::{
    BlendMode, BlurMode, ColorFilter, Direction, Easing, EmojiStyle, FillMode, Fit,
    FlowDirection, GifQuality, MaskMode, OutputFormat, SpinDirection, StrokeCap, StrokeJoin,
    TextSplit, TextTransform, TranscriptEffect, TranscriptPlacement, TranscriptSplit, WarpMode,
};
pub use crate::properties::structures::{
    Blur, Fill, FillColor, FillColorStop, FontDefinition, Shadow, Stroke, Warp, WarpPoint,
};
pub use crate::properties::text::{Font, TextBackground};
pub use crate::properties::value::{Keyframe, Prop, Scalar};

pub use crate::animation::{
    Animation, AnimationTiming, Fade, Scale, Slide, Spin, TextAppear, TextSlide, TextTypewriter,
};
pub use crate::client::{
    ApiRequest, ApiResponse, Client, ClientBuilder, ClientConfig, HttpTransport, Method,
    Transport,
};
pub use crate::element::{
    Audio, Composition, Element, ElementProps, Ellipse, FillProps, Image, Rectangle, Shape,
    ShapeProps, StrokeProps, Text, Video,
};
pub use crate::render::{Render, RenderOptions, RenderSource, RenderStatus};
pub use crate::source::Source;
