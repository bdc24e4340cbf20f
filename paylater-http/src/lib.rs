#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP communication layer for the Paysafe Pay Later REST API.
//!
//! This crate wraps the Pay Later endpoints (initialize, authorize,
//! capture, refund, query, legal documents) in typed, async API surfaces.
//! The [`Communicator`] resolves URIs against the configured endpoint,
//! marshals request and response bodies, and translates every failure into
//! one of the four [`PayLaterError`] kinds, so callers never observe
//! transport- or JSON-library error types.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use paylater::{Amount, Currency, InitializePurchaseRequest};
//! use paylater_http::api::PurchaseLifecycleApi;
//! use paylater_http::{Credentials, factory};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let communicator = Arc::new(factory::create_communicator_with_endpoint(
//!     "https://test-gateway.payolution.com".parse()?,
//! ));
//! let lifecycle = PurchaseLifecycleApi::new(Arc::clone(&communicator));
//!
//! let credentials = Credentials::SecretKey("secret-key".into());
//! let request = InitializePurchaseRequest::new(Amount::new(50_000, Currency::Eur));
//! let (response, token) = lifecycle
//!     .initialize_purchase(&request, &credentials)
//!     .await?
//!     .into_parts();
//!
//! // `token` authorizes the consumer's client-side calls.
//! # let _ = (response, token);
//! communicator.close();
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`api`] - Per-resource API surfaces
//! - [`auth`] - Call credentials (secret key or bearer token)
//! - [`communicator`] - The typed request/response façade
//! - [`config`] - Endpoint and transport configuration
//! - [`connection`] - Raw network exchange over `reqwest`
//! - [`error`] - The closed error taxonomy
//! - [`factory`] - Wiring helpers
//! - [`logging`] - Pluggable, redacting request/response logging
//! - [`marshaller`] - JSON wire-format conversion

pub mod api;
pub mod auth;
pub mod communicator;
pub mod config;
pub mod connection;
pub mod constants;
pub mod error;
pub mod factory;
pub mod logging;
pub mod marshaller;

pub use auth::Credentials;
pub use communicator::{Communicator, ResponseWithAuthorization};
pub use config::{Configuration, TlsProtocol};
pub use connection::{Connection, HttpConnection, RawResponse};
pub use error::{ApiError, ConfigurationError, PayLaterError};
pub use logging::{CommunicatorLogger, TracingCommunicatorLogger};
pub use marshaller::{JsonMarshaller, Marshaller};
