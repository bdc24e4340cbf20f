//! Request, response, and shared value types for the Pay Later API.
//!
//! All records serialize to the camelCase wire names the platform expects.
//! Optional fields are omitted from request payloads when unset; required
//! fields are always present. Construction is `new` for required fields
//! plus consuming `with_*` mutators for everything optional.

mod amount;
mod consumer;
mod operation;
mod purchase;
mod request;

pub use amount::{Amount, Currency};
pub use consumer::{Address, Consumer, Country, Person};
pub use operation::{OperationResult, OperationStatus, PurchaseOperationResponse};
pub use purchase::{
    MerchantReference, PaymentOption, ProductType, PurchaseInformation, PurchaseState,
};
pub use request::{
    AuthorizePurchaseRequest, CapturePurchaseRequest, InitializePurchaseRequest, MethodType,
    RefundPurchaseRequest,
};
