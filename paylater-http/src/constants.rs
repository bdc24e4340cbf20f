//! Header names and configuration defaults.

use std::time::Duration;

/// Header carrying the long-lived server-to-server secret key.
pub const SECRET_KEY_HEADER: &str = "paysafe-pl-secret-key";

/// Response header carrying the short-lived, purchase-scoped token minted
/// by the initialize operation.
pub const ACCESS_TOKEN_HEADER: &str = "access_token";

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default read timeout.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection pool size.
pub const DEFAULT_MAX_CONNECTIONS: usize = 10;
