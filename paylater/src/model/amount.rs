//! Monetary amounts in minor units.

use serde::{Deserialize, Serialize};

/// A monetary amount in the minor units of its currency (e.g. cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    /// Amount in minor units.
    pub amount: i64,
    /// ISO 4217 currency.
    pub currency: Currency,
}

impl Amount {
    /// Creates a new amount.
    #[must_use]
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

/// Supported ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum Currency {
    Eur,
    Chf,
    Gbp,
    Usd,
    Pln,
    Czk,
    Dkk,
    Nok,
    Sek,
    Huf,
    Ron,
    Bgn,
    Cad,
    Aud,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_serializes_to_wire_names() {
        let amount = Amount::new(50_000, Currency::Eur);
        let json = serde_json::to_value(amount).unwrap();
        assert_eq!(json, serde_json::json!({"amount": 50_000, "currency": "EUR"}));
    }

    #[test]
    fn currency_round_trips() {
        let parsed: Currency = serde_json::from_str("\"CHF\"").unwrap();
        assert_eq!(parsed, Currency::Chf);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"CHF\"");
    }
}
