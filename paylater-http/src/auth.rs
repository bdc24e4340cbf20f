//! Call credentials.

use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};

use crate::constants::SECRET_KEY_HEADER;

/// Credential attached to a single call.
///
/// Every endpoint accepts exactly one of the two forms, so the variants
/// replace the per-method secret-key/bearer duplication of the platform's
/// other SDKs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Long-lived secret key for server-to-server calls, sent as
    /// `paysafe-pl-secret-key`.
    SecretKey(String),
    /// Short-lived, purchase-scoped token from the initialize response,
    /// sent as `Authorization: Bearer <token>` for client-side calls.
    AuthorizationToken(String),
}

impl Credentials {
    /// Inserts this credential's header into `headers`.
    ///
    /// # Panics
    ///
    /// Panics if the credential contains characters that are not valid in
    /// an HTTP header value; that is a programming error.
    pub fn apply(&self, headers: &mut HeaderMap) {
        match self {
            Self::SecretKey(key) => {
                let value = HeaderValue::from_str(key).expect("valid secret key");
                headers.insert(SECRET_KEY_HEADER, value);
            }
            Self::AuthorizationToken(token) => {
                let value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .expect("valid authorization token");
                headers.insert(AUTHORIZATION, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_key_sets_the_platform_header() {
        let mut headers = HeaderMap::new();
        Credentials::SecretKey("sk-test".into()).apply(&mut headers);
        assert_eq!(headers.get(SECRET_KEY_HEADER).unwrap(), "sk-test");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn token_is_sent_in_bearer_format() {
        let mut headers = HeaderMap::new();
        Credentials::AuthorizationToken("abc123".into()).apply(&mut headers);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
    }
}
