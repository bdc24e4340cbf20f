//! Pure wiring helpers for assembling a communicator.

use std::path::Path;

use url::Url;

use crate::communicator::Communicator;
use crate::config::Configuration;
use crate::error::ConfigurationError;

/// Creates a communicator with the standard HTTP connection and JSON
/// marshaller.
#[must_use]
pub fn create_communicator(configuration: &Configuration) -> Communicator {
    Communicator::from_configuration(configuration)
}

/// Creates a communicator for the given endpoint with default transport
/// settings.
#[must_use]
pub fn create_communicator_with_endpoint(api_endpoint: Url) -> Communicator {
    create_communicator(&Configuration::new(api_endpoint))
}

/// Loads a [`Configuration`] from a properties file.
///
/// # Errors
///
/// Returns [`ConfigurationError`] when the file cannot be read or does not
/// form a valid configuration.
pub fn create_configuration_from_file(
    path: impl AsRef<Path>,
) -> Result<Configuration, ConfigurationError> {
    Configuration::from_properties_file(path)
}
