//! The typed request/response façade used by the API surfaces.

use std::sync::{Arc, RwLock};

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::connection::{Connection, HttpConnection, RawResponse};
use crate::constants::ACCESS_TOKEN_HEADER;
use crate::error::{ApiError, PayLaterError};
use crate::logging::{self, CommunicatorLogger};
use crate::marshaller::{JsonMarshaller, Marshaller};

/// A typed response body paired with the authorization token minted by the
/// same call.
///
/// Returned only by the initialize operation family, which surfaces a
/// short-lived access token in a response header.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseWithAuthorization<T> {
    response: T,
    authorization: String,
}

impl<T> ResponseWithAuthorization<T> {
    /// The decoded response body.
    pub const fn response(&self) -> &T {
        &self.response
    }

    /// The token extracted from the `access_token` response header.
    #[must_use]
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Splits into the response body and the token.
    pub fn into_parts(self) -> (T, String) {
        (self.response, self.authorization)
    }
}

/// Executes typed exchanges against the Pay Later API.
///
/// Resolves relative URIs against the configured base endpoint, marshals
/// the outgoing body, delegates the raw exchange to its [`Connection`],
/// decodes the incoming body, and translates error responses into
/// [`PayLaterError`]. One communicator is meant to be shared: `execute`
/// takes `&self` and concurrent calls never cross-deliver responses.
///
/// Closing drops the connection, releasing its pooled transport resources,
/// and blocks new calls; in-flight exchanges keep their own handle and run
/// to completion (they are bounded by the configured timeouts).
pub struct Communicator<C = HttpConnection, M = JsonMarshaller> {
    api_endpoint: Url,
    connection: RwLock<Option<Arc<C>>>,
    marshaller: M,
    logger: RwLock<Option<Arc<dyn CommunicatorLogger>>>,
}

impl<C: std::fmt::Debug, M: std::fmt::Debug> std::fmt::Debug for Communicator<C, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Communicator")
            .field("api_endpoint", &self.api_endpoint.as_str())
            .field("marshaller", &self.marshaller)
            .field(
                "closed",
                &self
                    .connection
                    .read()
                    .expect("connection lock poisoned")
                    .is_none(),
            )
            .finish_non_exhaustive()
    }
}

impl<C, M> Communicator<C, M>
where
    C: Connection,
    M: Marshaller,
{
    /// Creates a communicator from its parts.
    pub fn new(mut api_endpoint: Url, connection: C, marshaller: M) -> Self {
        // Relative URIs resolve against the endpoint path, so it must be
        // treated as a directory.
        if !api_endpoint.path().ends_with('/') {
            let path = format!("{}/", api_endpoint.path());
            api_endpoint.set_path(&path);
        }
        Self {
            api_endpoint,
            connection: RwLock::new(Some(Arc::new(connection))),
            marshaller,
            logger: RwLock::new(None),
        }
    }

    /// The configured base endpoint.
    pub const fn api_endpoint(&self) -> &Url {
        &self.api_endpoint
    }

    /// Starts reporting every exchange to the given logger.
    pub fn enable_logging(&self, logger: Arc<dyn CommunicatorLogger>) {
        *self.logger.write().expect("logger lock poisoned") = Some(logger);
    }

    /// Stops reporting exchanges.
    pub fn disable_logging(&self) {
        *self.logger.write().expect("logger lock poisoned") = None;
    }

    /// Drops the connection, releasing its pooled transport resources, and
    /// blocks new calls. Idempotent; in-flight exchanges hold their own
    /// handle to the connection and run to completion.
    pub fn close(&self) {
        self.connection
            .write()
            .expect("connection lock poisoned")
            .take();
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.connection
            .read()
            .expect("connection lock poisoned")
            .is_none()
    }

    /// Executes an exchange and decodes the response body into `R`.
    ///
    /// # Errors
    ///
    /// One of the four [`PayLaterError`] kinds; see the crate-level error
    /// taxonomy.
    ///
    /// # Panics
    ///
    /// Panics if `relative_uri` still contains an unresolved `{placeholder}`;
    /// that is a programming error, not a runtime condition.
    pub async fn execute<B, R>(
        &self,
        method: Method,
        relative_uri: &str,
        headers: HeaderMap,
        body: Option<&B>,
    ) -> Result<R, PayLaterError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let raw = self.exchange(method, relative_uri, headers, body).await?;
        self.marshaller.unmarshal_bytes(&raw.body)
    }

    /// Executes an exchange and pairs the decoded body with the value of
    /// the `access_token` response header.
    ///
    /// # Errors
    ///
    /// As [`execute`](Self::execute); additionally a successful response
    /// without the `access_token` header is a
    /// [`PayLaterError::MarshallerSyntax`].
    ///
    /// # Panics
    ///
    /// As [`execute`](Self::execute).
    pub async fn execute_with_authorization_header<B, R>(
        &self,
        method: Method,
        relative_uri: &str,
        headers: HeaderMap,
        body: Option<&B>,
    ) -> Result<ResponseWithAuthorization<R>, PayLaterError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let raw = self.exchange(method, relative_uri, headers, body).await?;
        let authorization = raw
            .headers
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .ok_or_else(|| {
                PayLaterError::missing_shape(format!(
                    "expected `{ACCESS_TOKEN_HEADER}` header missing from response"
                ))
            })?;
        let response = self.marshaller.unmarshal_bytes(&raw.body)?;
        Ok(ResponseWithAuthorization {
            response,
            authorization,
        })
    }

    /// Executes an exchange and returns the response body as text
    /// (the legal-documents endpoints return HTML, not JSON).
    ///
    /// # Errors
    ///
    /// As [`execute`](Self::execute); a non-UTF-8 body is a
    /// [`PayLaterError::MarshallerSyntax`].
    ///
    /// # Panics
    ///
    /// As [`execute`](Self::execute).
    pub async fn execute_text<B>(
        &self,
        method: Method,
        relative_uri: &str,
        headers: HeaderMap,
        body: Option<&B>,
    ) -> Result<String, PayLaterError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let raw = self.exchange(method, relative_uri, headers, body).await?;
        String::from_utf8(raw.body.to_vec())
            .map_err(|_| PayLaterError::missing_shape("response body is not valid UTF-8"))
    }

    /// Runs the full exchange up to (and including) error-status
    /// translation; returns the raw response only for success statuses.
    async fn exchange<B>(
        &self,
        method: Method,
        relative_uri: &str,
        mut headers: HeaderMap,
        body: Option<&B>,
    ) -> Result<RawResponse, PayLaterError>
    where
        B: Serialize + ?Sized + Sync,
    {
        // Clone the handle out so the guard never crosses an await; close()
        // can then release the pool while this exchange finishes.
        let connection = self
            .connection
            .read()
            .expect("connection lock poisoned")
            .clone()
            .ok_or(PayLaterError::Closed)?;
        assert!(
            !relative_uri.contains(['{', '}']),
            "unresolved placeholder in URI `{relative_uri}`"
        );

        let url = self
            .api_endpoint
            .join(relative_uri.trim_start_matches('/'))
            .expect("relative URI resolves against the API endpoint");

        let body_text = match body {
            Some(body) => {
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static(self.marshaller.content_type()),
                );
                Some(self.marshaller.marshal(body)?)
            }
            None => None,
        };

        self.with_logger(|logger| {
            logger.log(&logging::request_message(
                &method,
                &url,
                &headers,
                body_text.as_deref(),
            ));
        });

        let result = connection.send(method, url, headers, body_text).await;
        let raw = match result {
            Ok(raw) => raw,
            Err(error) => {
                self.with_logger(|logger| {
                    logger.log_error("Exchange failed before a response was received", &error);
                });
                return Err(error);
            }
        };

        self.with_logger(|logger| {
            logger.log(&logging::response_message(raw.status, &raw.headers, &raw.body));
        });

        if raw.status.is_success() {
            Ok(raw)
        } else {
            Err(ApiError::from_response(raw.status, &raw.body).into())
        }
    }

    /// Runs `f` against the enabled logger, if any.
    fn with_logger(&self, f: impl FnOnce(&dyn CommunicatorLogger)) {
        let guard = self.logger.read().expect("logger lock poisoned");
        if let Some(logger) = guard.as_deref() {
            f(logger);
        }
    }
}

impl Communicator {
    /// Creates a communicator with the standard HTTP connection and JSON
    /// marshaller for the given configuration.
    #[must_use]
    pub fn from_configuration(configuration: &crate::Configuration) -> Self {
        Self::new(
            configuration.api_endpoint.clone(),
            HttpConnection::new(configuration),
            JsonMarshaller,
        )
    }
}
