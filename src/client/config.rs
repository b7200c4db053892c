use super::Client;
use super::transport::{HttpTransport, Transport};
use crate::foundation::error::{Error, Result};
use std::fmt;
use std::time::Duration;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.creatomate.com/v1";

/// Per-request HTTP timeout unless overridden.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings of a [`Client`]. Built with [`ClientBuilder`].
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
}

impl ClientConfig {
    /// API root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request HTTP timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for [`Client`].
#[derive(Clone, Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientBuilder {
    /// Required.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at another API root, for example a local mock.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request HTTP timeout. Does not bound the wait in [`Client::render`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the settings.
    pub fn config(self) -> Result<ClientConfig> {
        let api_key = self
            .api_key
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::config("api key is required"))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "base url must start with http:// or https://, got '{base_url}'"
            )));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_HTTP_TIMEOUT);
        if timeout.is_zero() {
            return Err(Error::config("http timeout must be non-zero"));
        }

        Ok(ClientConfig {
            api_key,
            base_url,
            timeout,
        })
    }

    /// Client using the pooled HTTP transport.
    pub fn build(self) -> Result<Client> {
        let config = self.config()?;
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Client::from_parts(config, transport))
    }

    /// Client using a caller-supplied transport.
    pub fn build_with<T: Transport>(self, transport: T) -> Result<Client<T>> {
        Ok(Client::from_parts(self.config()?, transport))
    }
}
