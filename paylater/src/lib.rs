#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Domain model types for the Paysafe Pay Later platform.
//!
//! This crate provides the request and response records exchanged with the
//! Pay Later REST API, version 1.0.0 of the published OpenAPI contract.
//! They are plain serde-backed value types with builder-style mutators and
//! carry no behavior of their own; the communication layer lives in the
//! `paylater-http` crate.
//!
//! # Overview
//!
//! A purchase progresses through provider-side states (initialized,
//! authorized, captured, refunded). The client only issues calls and reports
//! whatever state the server returns — no state is enforced locally.
//!
//! # Modules
//!
//! - [`model`] - Request, response, and shared value types

pub mod model;

pub use model::*;
