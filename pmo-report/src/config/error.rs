//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while resolving the report configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required environment variables are unset or empty.
    #[error("Missing required environment variables: {}", .names.join(", "))]
    MissingVariables { names: Vec<&'static str> },

    /// A URL-valued setting could not be parsed.
    #[error("Invalid URL in {name} ('{value}'): {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// Failed to read the configuration file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
