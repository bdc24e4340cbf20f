//! Communicator configuration.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::constants::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_CONNECTIONS, DEFAULT_READ_TIMEOUT};
use crate::error::ConfigurationError;

/// Property key for the API endpoint.
pub const ENDPOINT_KEY: &str = "paysafe.paylater.api.endpoint";
/// Property key for the connect timeout in milliseconds.
pub const CONNECT_TIMEOUT_KEY: &str = "paysafe.paylater.api.connect-timeout";
/// Property key for the read timeout in milliseconds.
pub const READ_TIMEOUT_KEY: &str = "paysafe.paylater.api.read-timeout";
/// Property key for the connection pool size.
pub const MAX_CONNECTIONS_KEY: &str = "paysafe.paylater.api.max-connections";
/// Property key for the comma-separated allowed TLS protocol versions.
pub const HTTPS_PROTOCOLS_KEY: &str = "paysafe.paylater.api.https-protocols";

/// TLS protocol versions the connection may negotiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TlsProtocol {
    /// TLS 1.2.
    V1_2,
    /// TLS 1.3.
    V1_3,
}

impl TlsProtocol {
    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "TLSv1.2" => Some(Self::V1_2),
            "TLSv1.3" => Some(Self::V1_3),
            _ => None,
        }
    }

    pub(crate) fn as_reqwest(self) -> reqwest::tls::Version {
        match self {
            Self::V1_2 => reqwest::tls::Version::TLS_1_2,
            Self::V1_3 => reqwest::tls::Version::TLS_1_3,
        }
    }
}

/// Transport and endpoint configuration for a communicator.
///
/// Immutable once the communicator is built. Constructed directly with
/// [`Configuration::new`] plus `with_*` mutators, or loaded from a
/// Java-properties style key/value source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Base URL of the Pay Later API.
    pub api_endpoint: Url,
    /// Maximum time to wait while establishing a connection.
    pub connect_timeout: Duration,
    /// Maximum time a read may stall before the exchange fails.
    pub read_timeout: Duration,
    /// Upper bound on pooled idle keep-alive connections. Admission of
    /// additional connections under load is transport-library policy.
    pub max_connections: usize,
    /// TLS protocol versions the connection may negotiate.
    pub https_protocols: Vec<TlsProtocol>,
}

impl Configuration {
    /// Creates a configuration for the given endpoint with default
    /// timeouts, pool size, and TLS 1.2/1.3.
    #[must_use]
    pub fn new(api_endpoint: Url) -> Self {
        Self {
            api_endpoint,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            https_protocols: vec![TlsProtocol::V1_2, TlsProtocol::V1_3],
        }
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Sets the read timeout.
    #[must_use]
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// Sets the connection pool size.
    #[must_use]
    pub fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Sets the allowed TLS protocol versions.
    #[must_use]
    pub fn with_https_protocols(mut self, https_protocols: Vec<TlsProtocol>) -> Self {
        self.https_protocols = https_protocols;
        self
    }

    /// Loads a configuration from a key/value properties map.
    ///
    /// Only [`ENDPOINT_KEY`] is required; every other key falls back to its
    /// default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the endpoint is missing or any
    /// present value cannot be parsed.
    pub fn from_properties(
        properties: &HashMap<String, String>,
    ) -> Result<Self, ConfigurationError> {
        let endpoint = properties
            .get(ENDPOINT_KEY)
            .ok_or(ConfigurationError::MissingProperty(ENDPOINT_KEY))?;
        let mut configuration = Self::new(Url::parse(endpoint)?);

        if let Some(value) = properties.get(CONNECT_TIMEOUT_KEY) {
            configuration.connect_timeout =
                Duration::from_millis(parse_number(CONNECT_TIMEOUT_KEY, value)?);
        }
        if let Some(value) = properties.get(READ_TIMEOUT_KEY) {
            configuration.read_timeout =
                Duration::from_millis(parse_number(READ_TIMEOUT_KEY, value)?);
        }
        if let Some(value) = properties.get(MAX_CONNECTIONS_KEY) {
            configuration.max_connections =
                usize::try_from(parse_number(MAX_CONNECTIONS_KEY, value)?).unwrap_or(usize::MAX);
        }
        if let Some(value) = properties.get(HTTPS_PROTOCOLS_KEY) {
            let mut protocols = Vec::new();
            for part in value.split(',') {
                let protocol = TlsProtocol::parse(part).ok_or_else(|| {
                    ConfigurationError::InvalidProperty {
                        key: HTTPS_PROTOCOLS_KEY,
                        value: part.trim().to_owned(),
                    }
                })?;
                protocols.push(protocol);
            }
            configuration.https_protocols = protocols;
        }

        Ok(configuration)
    }

    /// Loads a configuration from a properties file on disk.
    ///
    /// Lines are `key=value`; blank lines and lines starting with `#` or
    /// `!` are ignored, matching the Java properties sources the platform
    /// documentation ships.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when the file cannot be read or its
    /// contents do not form a valid configuration.
    pub fn from_properties_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let contents = std::fs::read_to_string(path)?;
        let mut properties = HashMap::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                properties.insert(key.trim().to_owned(), value.trim().to_owned());
            }
        }
        Self::from_properties(&properties)
    }

    /// Lowest allowed TLS version, used as the transport's floor.
    pub(crate) fn min_tls(&self) -> Option<TlsProtocol> {
        self.https_protocols.iter().min().copied()
    }

    /// Highest allowed TLS version, used as the transport's ceiling.
    pub(crate) fn max_tls(&self) -> Option<TlsProtocol> {
        self.https_protocols.iter().max().copied()
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<u64, ConfigurationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigurationError::InvalidProperty {
            key,
            value: value.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn endpoint_alone_uses_defaults() {
        let configuration = Configuration::from_properties(&properties(&[(
            ENDPOINT_KEY,
            "https://test-gateway.payolution.com",
        )]))
        .unwrap();
        assert_eq!(configuration.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(configuration.read_timeout, DEFAULT_READ_TIMEOUT);
        assert_eq!(configuration.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(
            configuration.https_protocols,
            vec![TlsProtocol::V1_2, TlsProtocol::V1_3]
        );
    }

    #[test]
    fn all_properties_are_honored() {
        let configuration = Configuration::from_properties(&properties(&[
            (ENDPOINT_KEY, "https://test-gateway.payolution.com"),
            (CONNECT_TIMEOUT_KEY, "2500"),
            (READ_TIMEOUT_KEY, "15000"),
            (MAX_CONNECTIONS_KEY, "4"),
            (HTTPS_PROTOCOLS_KEY, "TLSv1.3"),
        ]))
        .unwrap();
        assert_eq!(configuration.connect_timeout, Duration::from_millis(2500));
        assert_eq!(configuration.read_timeout, Duration::from_millis(15_000));
        assert_eq!(configuration.max_connections, 4);
        assert_eq!(configuration.https_protocols, vec![TlsProtocol::V1_3]);
        assert_eq!(configuration.min_tls(), Some(TlsProtocol::V1_3));
    }

    #[test]
    fn missing_endpoint_is_rejected() {
        let result = Configuration::from_properties(&HashMap::new());
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingProperty(ENDPOINT_KEY))
        ));
    }

    #[test]
    fn malformed_timeout_is_rejected() {
        let result = Configuration::from_properties(&properties(&[
            (ENDPOINT_KEY, "https://test-gateway.payolution.com"),
            (CONNECT_TIMEOUT_KEY, "soon"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidProperty {
                key: CONNECT_TIMEOUT_KEY,
                ..
            })
        ));
    }
}
