//! Purchase state as reported by the platform.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::amount::{Amount, Currency};
use super::consumer::{Consumer, Country};

/// Provider-side lifecycle state of a purchase.
///
/// The client never enforces this progression; it reports whatever the
/// server returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum PurchaseState {
    Initialized,
    Prechecked,
    Declined,
    Authorized,
    AuthorizationPending,
    Cancelled,
    Fulfillment,
    Blocked,
    TimedOut,
    Closed,
}

/// Financing product offered for a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ProductType {
    Invoice,
    Installment,
    Monthly,
}

/// Merchant-side identifiers attached to a purchase.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantReference {
    /// Order identifier in the merchant's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Customer identifier in the merchant's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Invoice identifier in the merchant's system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
}

impl MerchantReference {
    /// Creates an empty merchant reference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the order identifier.
    #[must_use]
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Sets the customer identifier.
    #[must_use]
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Sets the invoice identifier.
    #[must_use]
    pub fn with_invoice_id(mut self, invoice_id: impl Into<String>) -> Self {
        self.invoice_id = Some(invoice_id.into());
        self
    }
}

/// A pre-configured, non-binding payment option returned by initialize.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOption {
    /// Identifier of the option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_id: Option<String>,
    /// Country the option applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_country: Option<Country>,
    /// Currency of the option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Financing product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    /// Total amount including interest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Amount>,
    /// Purchase amount financed by the option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_amount: Option<Amount>,
    /// Nominal interest rate in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    /// Effective interest rate in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_interest_rate: Option<f64>,
    /// Number of payments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_payments: Option<u32>,
}

/// Latest state of a purchase as reported by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInformation {
    /// Purchase identifier, e.g. `CID-kdifr9ho54zavijvr9jv`.
    pub purchase_id: String,
    /// Current lifecycle state.
    pub state: PurchaseState,
    /// Currency of the purchase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Initialized purchase amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_amount: Option<Amount>,
    /// Amount authorized so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_amount: Option<Amount>,
    /// Amount captured so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_amount: Option<Amount>,
    /// Amount still capturable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_capture_amount: Option<Amount>,
    /// Amount refunded so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refunded_amount: Option<Amount>,
    /// Amount still refundable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_refundable_amount: Option<Amount>,
    /// Consumer data attached to the purchase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer: Option<Consumer>,
    /// Merchant-side identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_reference: Option<MerchantReference>,
    /// Pre-configured payment options.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_options: Vec<PaymentOption>,
    /// Additional provider metadata, e.g. the self-service authorization URL.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub meta_data: HashMap<String, String>,
    /// When the purchase was created.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub created: Option<OffsetDateTime>,
    /// When the purchase was last updated.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub last_updated: Option<OffsetDateTime>,
}
