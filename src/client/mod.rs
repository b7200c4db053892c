//! Asynchronous client for the render endpoints.

mod config;
mod transport;

pub use config::{ClientBuilder, ClientConfig, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

use crate::foundation::error::{Error, Result, WaitError};
use crate::foundation::json::ToJson;
use crate::render::{Render, RenderOptions};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Delay between two status checks while waiting for renders.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Wait used by [`Client::render`] when the caller passes a zero timeout.
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(15 * 60);

/// Upper bound on the wait of [`Client::render`].
pub const MAX_RENDER_TIMEOUT: Duration = Duration::from_secs(60 * 60);

const USER_AGENT: &str = concat!("creatomate-rs/", env!("CARGO_PKG_VERSION"));

/// Creatomate API client.
///
/// Cloning is cheap and clones share the transport's connection pool. Every call keeps its own
/// bookkeeping, so one client can drive several renders concurrently.
#[derive(Clone, Debug)]
pub struct Client<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl Client {
    /// Client for the production API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Start configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }
}

impl<T: Transport> Client<T> {
    pub(crate) fn from_parts(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Active settings.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Start rendering without waiting. Returns one render per output the request produces.
    #[tracing::instrument(skip_all, err)]
    pub async fn submit(&self, options: &RenderOptions) -> Result<Vec<Render>> {
        let renders: Vec<Render> = self
            .call(Method::Post, "/renders", Some(options.to_json()))
            .await?;
        tracing::debug!(count = renders.len(), "render submitted");
        Ok(renders)
    }

    /// Current state of one render.
    #[tracing::instrument(skip(self), err)]
    pub async fn fetch(&self, id: &str) -> Result<Render> {
        self.call(Method::Get, &format!("/renders/{id}"), None).await
    }

    /// Submit and wait until every render is finished or `timeout` elapses.
    ///
    /// A zero `timeout` waits [`DEFAULT_RENDER_TIMEOUT`]; longer timeouts are capped at
    /// [`MAX_RENDER_TIMEOUT`]. On timeout the error keeps the renders that already finished.
    pub async fn render(
        &self,
        options: &RenderOptions,
        timeout: Duration,
    ) -> std::result::Result<Vec<Render>, WaitError> {
        self.render_with_cancel(options, timeout, &CancellationToken::new())
            .await
    }

    /// Like [`Client::render`], but also stops as soon as `cancel` fires.
    #[tracing::instrument(skip(self, options, cancel))]
    pub async fn render_with_cancel(
        &self,
        options: &RenderOptions,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> std::result::Result<Vec<Render>, WaitError> {
        let timeout = effective_timeout(timeout);
        let submitted = self.submit(options).await?;
        let deadline = Instant::now() + timeout;

        let (mut finished, mut pending): (Vec<Render>, Vec<Render>) =
            submitted.into_iter().partition(Render::is_terminal);

        let mut ticker = time::interval_at(Instant::now() + POLL_INTERVAL, POLL_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while !pending.is_empty() {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(interrupted(Error::Cancelled, finished)),
                _ = time::sleep_until(deadline) => return Err(interrupted(Error::Timeout, finished)),
                _ = ticker.tick() => {}
            }

            let mut still_pending = Vec::with_capacity(pending.len());
            for render in pending {
                let polled = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(interrupted(Error::Cancelled, finished)),
                    _ = time::sleep_until(deadline) => return Err(interrupted(Error::Timeout, finished)),
                    polled = self.fetch(&render.id) => polled,
                };
                let polled = match polled {
                    Ok(polled) => polled,
                    Err(error) => return Err(WaitError::new(error, finished)),
                };

                tracing::debug!(id = %polled.id, status = ?polled.status, "polled render");
                if polled.is_terminal() {
                    finished.push(polled);
                } else {
                    still_pending.push(polled);
                }
            }
            pending = still_pending;
        }

        Ok(finished)
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<R> {
        let mut headers = vec![
            ("Authorization", format!("Bearer {}", self.config.api_key)),
            ("User-Agent", USER_AGENT.to_owned()),
        ];
        if body.is_some() {
            headers.push(("Content-Type", "application/json".to_owned()));
        }
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.config.base_url, path),
            headers,
            body: body.map(|b| b.to_string().into_bytes()),
        };

        let response = self.transport.send(request).await?;
        if !(200..300).contains(&response.status) {
            return Err(Error::from_status(response.status, error_hint(&response.body)));
        }
        serde_json::from_slice(&response.body).map_err(|e| Error::decode(e.to_string()))
    }
}

fn effective_timeout(timeout: Duration) -> Duration {
    if timeout.is_zero() {
        DEFAULT_RENDER_TIMEOUT
    } else {
        timeout.min(MAX_RENDER_TIMEOUT)
    }
}

fn interrupted(error: Error, finished: Vec<Render>) -> WaitError {
    tracing::warn!(%error, finished = finished.len(), "stopped waiting for renders");
    WaitError::new(error, finished)
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    hint: Option<String>,
}

fn error_hint(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.hint)
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/client/client.rs"]
mod tests;
