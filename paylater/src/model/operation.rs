//! Operation result envelope returned by every purchase lifecycle endpoint.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::purchase::PurchaseInformation;

/// Processing outcome of a single API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    /// The operation was processed successfully.
    Ok,
    /// The operation failed.
    Error,
    /// The operation is still being processed.
    Pending,
    /// The outcome could not be determined.
    Unknown,
}

/// Details about how an operation was processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    /// Unique identifier of the operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Processing outcome.
    pub status: OperationStatus,
    /// Provider status code, e.g. `0.0.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    /// Human-readable status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// When processing started.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub processing_start: Option<OffsetDateTime>,
    /// When processing ended.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub processing_end: Option<OffsetDateTime>,
}

/// Response returned by every purchase lifecycle endpoint.
///
/// The same shape is returned on errors; `purchase` is then absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOperationResponse {
    /// How the operation was processed.
    pub result: OperationResult,
    /// Latest state of the purchase, with different fields populated per
    /// operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase: Option<PurchaseInformation>,
}
