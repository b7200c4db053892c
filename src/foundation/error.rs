use crate::render::Render;

/// Result alias used across the client surface.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the Creatomate client.
///
/// Serialization never produces one of these; only transport, HTTP status and response decoding
/// problems do.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP 400. Carries the hint returned by the service.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// HTTP 401.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// HTTP 402.
    #[error("Insufficient credits")]
    InsufficientCredits,

    /// HTTP 429.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The request never produced an HTTP response.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The wait deadline elapsed before every render finished.
    #[error("Timeout waiting for render to complete")]
    Timeout,

    /// The caller cancelled the wait.
    #[error("Cancelled while waiting for render to complete")]
    Cancelled,

    /// Any other non-2xx response. Carries the hint returned by the service, if any.
    #[error("{}", api_message(.0))]
    Api(String),

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The client was configured with invalid settings.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub(crate) fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Map an HTTP error status and the service-provided hint to an error.
    pub fn from_status(status: u16, hint: impl Into<String>) -> Self {
        let hint = hint.into();
        match status {
            400 => Self::BadRequest(hint),
            401 => Self::InvalidApiKey,
            402 => Self::InsufficientCredits,
            429 => Self::RateLimitExceeded,
            _ => Self::Api(hint),
        }
    }

    /// `true` for [`Error::Timeout`] and [`Error::Cancelled`], where polling by id can resume.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Timeout | Self::Cancelled)
    }
}

fn api_message(hint: &str) -> &str {
    if hint.is_empty() {
        "Creatomate API error"
    } else {
        hint
    }
}

/// Error returned by the wait-for-completion loop.
///
/// The renders that reached a terminal status before the failure are kept in `finished`, so a
/// timeout never hides work that already completed.
#[derive(thiserror::Error, Debug)]
#[error("{error}")]
pub struct WaitError {
    /// What stopped the wait.
    #[source]
    pub error: Error,
    /// Renders that finished before the wait stopped.
    pub finished: Vec<Render>,
}

impl WaitError {
    pub(crate) fn new(error: Error, finished: Vec<Render>) -> Self {
        Self { error, finished }
    }
}

impl From<Error> for WaitError {
    fn from(error: Error) -> Self {
        Self::new(error, Vec::new())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
