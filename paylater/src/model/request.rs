//! Request bodies for the purchase lifecycle and authorization endpoints.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::consumer::Consumer;
use super::purchase::MerchantReference;

/// How the consumer is pointed at the self-service authorization flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MethodType {
    /// The caller receives a redirect URL.
    Url,
    /// The consumer receives the URL via SMS.
    Sms,
}

/// Data needed to initialize a purchase.
///
/// Only the purchase amount is required; consumer data is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializePurchaseRequest {
    /// Amount to initialize the purchase for.
    pub purchase_amount: Amount,
    /// Known consumer data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer: Option<Consumer>,
    /// Merchant-side identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_reference: Option<MerchantReference>,
    /// Free-form additional information.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_information: Vec<String>,
}

impl InitializePurchaseRequest {
    /// Creates a request for the given purchase amount.
    #[must_use]
    pub fn new(purchase_amount: Amount) -> Self {
        Self {
            purchase_amount,
            consumer: None,
            merchant_reference: None,
            additional_information: Vec::new(),
        }
    }

    /// Sets the consumer data.
    #[must_use]
    pub fn with_consumer(mut self, consumer: Consumer) -> Self {
        self.consumer = Some(consumer);
        self
    }

    /// Sets the merchant reference.
    #[must_use]
    pub fn with_merchant_reference(mut self, merchant_reference: MerchantReference) -> Self {
        self.merchant_reference = Some(merchant_reference);
        self
    }

    /// Adds a free-form additional information entry.
    #[must_use]
    pub fn with_additional_information(mut self, info: impl Into<String>) -> Self {
        self.additional_information.push(info.into());
        self
    }
}

/// Data needed to start the authorization of an initialized purchase.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizePurchaseRequest {
    /// Purchase to authorize. Either this or `order_id` must be set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_id: Option<String>,
    /// Merchant order to authorize.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Phone number the SMS method sends the URL to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Delivery method for the authorization URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<MethodType>,
    /// Where the consumer is redirected after successful authorization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    /// Where state changes are reported to the merchant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl AuthorizePurchaseRequest {
    /// Creates an empty authorization request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the purchase identifier.
    #[must_use]
    pub fn with_purchase_id(mut self, purchase_id: impl Into<String>) -> Self {
        self.purchase_id = Some(purchase_id.into());
        self
    }

    /// Sets the merchant order identifier.
    #[must_use]
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Sets the phone number for the SMS method.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the delivery method.
    #[must_use]
    pub fn with_method(mut self, method: MethodType) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the success redirect URL.
    #[must_use]
    pub fn with_success_url(mut self, success_url: impl Into<String>) -> Self {
        self.success_url = Some(success_url.into());
        self
    }

    /// Sets the callback URL.
    #[must_use]
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }
}

/// Data needed to capture (= ship) purchased goods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturePurchaseRequest {
    /// Purchase to capture against. Either this or `order_id` must be set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_id: Option<String>,
    /// Merchant order to capture against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Amount being fulfilled.
    pub fulfillment_amount: Amount,
}

impl CapturePurchaseRequest {
    /// Creates a capture request for the given fulfillment amount.
    #[must_use]
    pub fn new(fulfillment_amount: Amount) -> Self {
        Self {
            purchase_id: None,
            order_id: None,
            fulfillment_amount,
        }
    }

    /// Sets the purchase identifier.
    #[must_use]
    pub fn with_purchase_id(mut self, purchase_id: impl Into<String>) -> Self {
        self.purchase_id = Some(purchase_id.into());
        self
    }

    /// Sets the merchant order identifier.
    #[must_use]
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }
}

/// Data needed to refund part of or the full captured amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundPurchaseRequest {
    /// Purchase to refund.
    pub purchase_id: String,
    /// Amount to refund.
    pub refund_amount: Amount,
    /// Free-form refund reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RefundPurchaseRequest {
    /// Creates a refund request.
    #[must_use]
    pub fn new(purchase_id: impl Into<String>, refund_amount: Amount) -> Self {
        Self {
            purchase_id: purchase_id.into(),
            refund_amount,
            reason: None,
        }
    }

    /// Sets the refund reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
