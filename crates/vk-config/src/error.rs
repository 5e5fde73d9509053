//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// Reading or writing a config file failed.
    #[error("Config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A config file could not be parsed as TOML.
    #[error("Config file is not valid TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A config document could not be serialized back to TOML.
    #[error("Failed to serialize config: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}
