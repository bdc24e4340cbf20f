//! Marshalling between domain objects and the JSON wire format.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PayLaterError;

/// Converts request and response objects to and from the wire format.
///
/// Implementations must be stateless with respect to individual calls and
/// safe to invoke concurrently. The communicator is generic over its
/// marshaller, so alternative wire formats can be swapped in.
pub trait Marshaller: Send + Sync {
    /// Serializes a request object to wire-format text.
    ///
    /// # Errors
    ///
    /// Returns [`PayLaterError::MarshallerSyntax`] if the object cannot be
    /// serialized; this does not happen for well-formed domain objects.
    fn marshal<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, PayLaterError>;

    /// Parses wire-format text into the requested type.
    ///
    /// # Errors
    ///
    /// Returns [`PayLaterError::MarshallerSyntax`] if the input is not a
    /// valid representation of `T`.
    fn unmarshal<T: DeserializeOwned>(&self, text: &str) -> Result<T, PayLaterError>;

    /// Parses a wire-format byte source into the requested type, without an
    /// intermediate string copy.
    ///
    /// # Errors
    ///
    /// Returns [`PayLaterError::MarshallerSyntax`] if the input is not a
    /// valid representation of `T`.
    fn unmarshal_bytes<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, PayLaterError>;

    /// Content type of the wire format this marshaller produces.
    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

/// The standard JSON marshaller.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMarshaller;

impl Marshaller for JsonMarshaller {
    fn marshal<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, PayLaterError> {
        serde_json::to_string(value)
            .map_err(|e| PayLaterError::syntax("request body could not be serialized", e))
    }

    fn unmarshal<T: DeserializeOwned>(&self, text: &str) -> Result<T, PayLaterError> {
        serde_json::from_str(text)
            .map_err(|e| PayLaterError::syntax("response body could not be decoded", e))
    }

    fn unmarshal_bytes<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, PayLaterError> {
        serde_json::from_slice(bytes)
            .map_err(|e| PayLaterError::syntax("response body could not be decoded", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paylater::{Amount, CapturePurchaseRequest, Currency};

    #[test]
    fn marshal_then_unmarshal_reproduces_object() {
        let marshaller = JsonMarshaller;
        let request = CapturePurchaseRequest::new(Amount::new(25_000, Currency::Eur))
            .with_order_id("75761090");
        let text = marshaller.marshal(&request).unwrap();
        let parsed: CapturePurchaseRequest = marshaller.unmarshal(&text).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn malformed_json_is_a_syntax_error() {
        let marshaller = JsonMarshaller;
        let result: Result<CapturePurchaseRequest, _> = marshaller.unmarshal("{\"purchaseId\":");
        assert!(matches!(
            result,
            Err(PayLaterError::MarshallerSyntax { source: Some(_), .. })
        ));
    }

    #[test]
    fn type_mismatch_is_a_syntax_error() {
        let marshaller = JsonMarshaller;
        let result: Result<Amount, _> =
            marshaller.unmarshal_bytes(br#"{"amount":"not-a-number","currency":"EUR"}"#);
        assert!(matches!(result, Err(PayLaterError::MarshallerSyntax { .. })));
    }
}
