//! Raw network exchange.

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use url::Url;

use crate::config::Configuration;
use crate::error::PayLaterError;

/// Everything a single exchange produced, before decoding.
///
/// Transient; consumed immediately into either a typed success object or
/// an error.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: Bytes,
}

/// Performs the raw network exchange for the communicator.
///
/// Implementations own all transport-level configuration (timeouts, pool
/// sizing, allowed TLS versions) and must tolerate concurrent invocation
/// from multiple tasks sharing one communicator.
pub trait Connection: Send + Sync {
    /// Sends a request and reads the complete response.
    ///
    /// # Errors
    ///
    /// Returns [`PayLaterError::Transport`] when the connection cannot be
    /// established, times out, or is dropped mid-response.
    fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<String>,
    ) -> impl Future<Output = Result<RawResponse, PayLaterError>> + Send;
}

/// [`Connection`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpConnection {
    client: reqwest::Client,
}

impl HttpConnection {
    /// Builds a connection from the transport parts of a configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying TLS backend cannot be initialized; this is
    /// an environment problem, not a runtime condition to recover from.
    #[must_use]
    pub fn new(configuration: &Configuration) -> Self {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(configuration.connect_timeout)
            .read_timeout(configuration.read_timeout)
            .pool_max_idle_per_host(configuration.max_connections);
        if let Some(min) = configuration.min_tls() {
            builder = builder.min_tls_version(min.as_reqwest());
        }
        if let Some(max) = configuration.max_tls() {
            builder = builder.max_tls_version(max.as_reqwest());
        }
        let client = builder.build().expect("failed to build reqwest::Client");
        Self { client }
    }

    /// Wraps a pre-configured `reqwest` client.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Connection for HttpConnection {
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Result<RawResponse, PayLaterError> {
        let mut request = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }
        let response = request.send().await.map_err(|e| PayLaterError::Transport {
            context: "request could not be completed",
            source: e,
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| PayLaterError::Transport {
                context: "response body could not be read",
                source: e,
            })?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
