use crate::foundation::error::{Error, Result};
use std::future::Future;
use std::time::Duration;

/// HTTP method of an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Used by [`crate::Client::fetch`].
    Get,
    /// Used by [`crate::Client::submit`].
    Post,
}

/// One fully-prepared API call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Header name and value pairs.
    pub headers: Vec<(&'static str, String)>,
    /// JSON body, if any.
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response; status handling happens in the client.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Sends API calls.
///
/// Implementations must be usable from several tasks at once. Any failure to obtain a response
/// is reported as [`Error::Connection`]; non-2xx responses are returned as `Ok`.
pub trait Transport: Send + Sync {
    /// Perform one request.
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse>> + Send;
}

/// [`Transport`] backed by a pooled `reqwest` client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("http client: {e}")))?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let mut builder = self.http.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::connection(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::connection(e.to_string()))?;
        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}
