//! Error types for the communication layer.
//!
//! Every failure a call can produce is one of the four [`PayLaterError`]
//! kinds. Transport- and JSON-library errors are translated at the single
//! boundary inside the communicator, so callers never observe `reqwest` or
//! `serde_json` error types directly.

use std::fmt;

use http::StatusCode;

/// Errors raised by an API exchange.
#[derive(Debug, thiserror::Error)]
pub enum PayLaterError {
    /// A payload (or required response header) did not match the expected
    /// shape during decode. Never raised while encoding well-formed domain
    /// objects.
    #[error("malformed response: {context}")]
    MarshallerSyntax {
        /// Human-readable context.
        context: String,
        /// The underlying decode error, when one exists.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The connection could not be established, timed out, or was dropped
    /// before a complete response was received. Carries no API status code.
    #[error("communication failure: {context}: {source}")]
    Transport {
        /// Human-readable context.
        context: &'static str,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The platform returned a recognized error status with a structured
    /// error payload.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An operation was attempted on a closed communicator. Raised before
    /// any network I/O happens.
    #[error("communicator is closed")]
    Closed,
}

impl PayLaterError {
    pub(crate) fn syntax(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MarshallerSyntax {
            context: context.into(),
            source: Some(source),
        }
    }

    pub(crate) fn missing_shape(context: impl Into<String>) -> Self {
        Self::MarshallerSyntax {
            context: context.into(),
            source: None,
        }
    }
}

/// A non-success HTTP response translated into its structured form.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Machine-readable error code from the body, e.g. `INVALID_AMOUNT`.
    pub error_code: Option<String>,
    /// Human-readable message from the body.
    pub message: Option<String>,
    /// The parsed error payload, when the body was valid JSON.
    pub payload: Option<serde_json::Value>,
}

impl ApiError {
    /// Translates an error response body into an [`ApiError`].
    ///
    /// The platform reports errors either as `{"error": .., "message": ..}`
    /// or as a purchase operation response whose `result` carries the code.
    /// Bodies that are not valid JSON are kept only in the display message.
    #[must_use]
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let payload: Option<serde_json::Value> = serde_json::from_slice(body).ok();
        let field = |name: &str| -> Option<String> {
            payload
                .as_ref()?
                .get(name)?
                .as_str()
                .map(str::to_owned)
        };
        let result_field = |name: &str| -> Option<String> {
            payload
                .as_ref()?
                .get("result")?
                .get(name)?
                .as_str()
                .map(str::to_owned)
        };
        let error_code = field("error").or_else(|| result_field("statusCode"));
        let message = field("message").or_else(|| result_field("statusMessage"));
        Self {
            status,
            error_code,
            message,
            payload,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the API returned status {}", self.status)?;
        if let Some(code) = &self.error_code {
            write!(f, ": {code}")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Errors raised while loading a [`Configuration`](crate::Configuration)
/// from a properties source.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// The properties source could not be read.
    #[error("unable to load properties: {0}")]
    Io(#[from] std::io::Error),

    /// A required property is missing.
    #[error("missing property `{0}`")]
    MissingProperty(&'static str),

    /// A property value could not be parsed.
    #[error("invalid value `{value}` for property `{key}`")]
    InvalidProperty {
        /// The offending property key.
        key: &'static str,
        /// The unparseable value.
        value: String,
    },

    /// The endpoint property is not a valid URL.
    #[error("invalid API endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}
