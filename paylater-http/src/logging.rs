//! Pluggable request/response logging.
//!
//! The communicator reports every outgoing request and incoming response
//! to an optional [`CommunicatorLogger`] with sensitive header values
//! masked. Logging never affects the outcome of a call.

use std::fmt::Write as _;

use http::{HeaderMap, Method, StatusCode};
use url::Url;

use crate::constants::{ACCESS_TOKEN_HEADER, SECRET_KEY_HEADER};

/// Header values that never appear in log output.
const SENSITIVE_HEADERS: [&str; 3] = ["authorization", SECRET_KEY_HEADER, ACCESS_TOKEN_HEADER];

const MASK: &str = "********";

/// Receives communicator log messages.
///
/// Implementations must be safe to call from multiple tasks and must not
/// panic; a logger failure must never fail the exchange it reports on.
pub trait CommunicatorLogger: Send + Sync {
    /// Logs a message.
    fn log(&self, message: &str);

    /// Logs a message about a failed exchange.
    fn log_error(&self, message: &str, error: &(dyn std::error::Error + 'static));
}

/// [`CommunicatorLogger`] that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCommunicatorLogger;

impl CommunicatorLogger for TracingCommunicatorLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "paylater", "{message}");
    }

    fn log_error(&self, message: &str, error: &(dyn std::error::Error + 'static)) {
        tracing::error!(target: "paylater", error = %error, "{message}");
    }
}

/// Renders headers for logging, masking sensitive values.
fn format_headers(headers: &HeaderMap) -> String {
    let mut out = String::from("[");
    for (i, (name, value)) in headers.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let shown = if SENSITIVE_HEADERS.contains(&name.as_str()) {
            MASK
        } else {
            value.to_str().unwrap_or(MASK)
        };
        let _ = write!(out, "{name}=\"{shown}\"");
    }
    out.push(']');
    out
}

/// Builds the outgoing-request log line.
pub(crate) fn request_message(
    method: &Method,
    url: &Url,
    headers: &HeaderMap,
    body: Option<&str>,
) -> String {
    let mut message = format!(
        "Outgoing request (method={method}, url={url}, headers={})",
        format_headers(headers)
    );
    if let Some(body) = body {
        let _ = write!(message, ", body: {body}");
    }
    message
}

/// Builds the incoming-response log line.
pub(crate) fn response_message(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> String {
    format!(
        "Incoming response (status={status}, headers={}), body: {}",
        format_headers(headers),
        String::from_utf8_lossy(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{AUTHORIZATION, CONTENT_TYPE};

    #[test]
    fn sensitive_header_values_are_masked() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc123".parse().unwrap());
        headers.insert(SECRET_KEY_HEADER, "secret-key-value".parse().unwrap());
        headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());

        let rendered = format_headers(&headers);
        assert!(!rendered.contains("abc123"));
        assert!(!rendered.contains("secret-key-value"));
        assert!(rendered.contains("authorization=\"********\""));
        assert!(rendered.contains("content-type=\"application/json\""));
    }

    #[test]
    fn request_message_includes_method_url_and_body() {
        let url: Url = "https://test-gateway.payolution.com/purchase/capture"
            .parse()
            .unwrap();
        let message = request_message(&Method::POST, &url, &HeaderMap::new(), Some("{}"));
        assert!(message.contains("method=POST"));
        assert!(message.contains("/purchase/capture"));
        assert!(message.ends_with("body: {}"));
    }
}
