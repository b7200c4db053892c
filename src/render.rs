//! The render resource returned by the service and the options used to request one.

use crate::foundation::json::{JsonObject, ToJson};
use crate::properties::constants::OutputFormat;
use crate::source::Source;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Lifecycle state of a render as reported by the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStatus {
    /// Accepted, not yet queued.
    Planned,
    /// Queued for a render worker.
    Waiting,
    /// Generating subtitles from audio.
    Transcribing,
    /// A worker is producing the output.
    Rendering,
    /// Output is available at [`Render::url`].
    Succeeded,
    /// See [`Render::error_message`].
    Failed,
    /// A status this client does not know about. Treated as terminal.
    #[default]
    #[serde(other)]
    Unknown,
}

impl RenderStatus {
    /// `true` while the service is still working on the render.
    pub fn is_in_progress(self) -> bool {
        matches!(
            self,
            Self::Planned | Self::Waiting | Self::Transcribing | Self::Rendering
        )
    }

    /// `true` once the render will not change anymore.
    pub fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }
}

/// Explicit `null` decodes like a missing key.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// A render job. Read-only on the client side; refresh it with [`crate::Client::fetch`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Render {
    /// Service-assigned id, used by [`crate::Client::fetch`].
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Current lifecycle state. `null` decodes to [`RenderStatus::Unknown`].
    #[serde(deserialize_with = "null_as_default")]
    pub status: RenderStatus,
    /// Reason for a `failed` status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Where the output file will be, or is, available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Preview image of the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_url: Option<String>,
    /// Template the render was made from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Name of that template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    /// Tags of that template.
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub template_tags: Vec<String>,
    /// Kept as reported so that new formats do not break decoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    /// Scale factor applied to the output resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_scale: Option<f64>,
    /// Output width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Output height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Frames per second of a video output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<f64>,
    /// Length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Output size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Template modifications the render was made with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifications: Option<Map<String, Value>>,
    /// Called by the service once the render finishes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Opaque caller data echoed back by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl Render {
    /// See [`RenderStatus::is_terminal`].
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// What to render: a typed document or an already-built JSON tree.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderSource {
    /// Serialized with [`Source::to_json`].
    Typed(Box<Source>),
    /// Sent as-is.
    Json(Value),
}

impl ToJson for RenderSource {
    fn to_json(&self) -> Value {
        match self {
            Self::Typed(source) => source.to_json(),
            Self::Json(value) => value.clone(),
        }
    }
}

impl From<Source> for RenderSource {
    fn from(source: Source) -> Self {
        Self::Typed(Box::new(source))
    }
}

impl From<Value> for RenderSource {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// Body of a `POST /renders` request.
///
/// Either `source` or `template_id` should be set; the service validates the combination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderOptions {
    /// Document to render.
    pub source: Option<RenderSource>,
    /// Overrides the document's output format.
    pub output_format: Option<OutputFormat>,
    /// Overrides the document's frame rate.
    pub frame_rate: Option<f64>,
    /// Scale factor applied to the output resolution.
    pub render_scale: Option<f64>,
    /// Upper bound on the output width; the aspect ratio is kept.
    pub max_width: Option<u32>,
    /// Upper bound on the output height; the aspect ratio is kept.
    pub max_height: Option<u32>,
    /// Render a template stored in the Creatomate account.
    pub template_id: Option<String>,
    /// Select templates by tag instead of by id.
    pub tags: Vec<String>,
    /// Changes applied to the template's elements, keyed by element name or id.
    pub modifications: Option<Map<String, Value>>,
    /// Called by the service once the render finishes.
    pub webhook_url: Option<String>,
    /// Opaque data echoed back in the render.
    pub metadata: Option<String>,
}

impl RenderOptions {
    /// Render the given document.
    pub fn from_source(source: impl Into<RenderSource>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// Render a stored template.
    pub fn from_template(template_id: impl Into<String>) -> Self {
        Self {
            template_id: Some(template_id.into()),
            ..Self::default()
        }
    }

    /// Add one template modification.
    pub fn modification(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.modifications
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

impl ToJson for RenderOptions {
    fn to_json(&self) -> Value {
        let mut obj = JsonObject::new();
        obj.opt("source", &self.source)
            .opt("output_format", &self.output_format)
            .opt("frame_rate", &self.frame_rate)
            .opt("render_scale", &self.render_scale)
            .opt("max_width", &self.max_width)
            .opt("max_height", &self.max_height)
            .opt("template_id", &self.template_id)
            .list("tags", &self.tags)
            .opt("webhook_url", &self.webhook_url)
            .opt("metadata", &self.metadata);
        if let Some(modifications) = &self.modifications {
            obj.set_value("modifications", Value::Object(modifications.clone()));
        }
        Value::Object(obj.finish())
    }
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
