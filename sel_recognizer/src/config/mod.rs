//! Configuration module for the expression recognizer
//!
//! Hard limits live in [`compile_time`] and cannot be changed at runtime.
//! User preferences live in [`runtime`]; they default from `SEL_*`
//! environment variables and may be overridden by a TOML file.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    LexicalPreferences, LogLevel, LoggingPreferences, RuntimeConfig, SyntaxPreferences,
};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("Setting '{setting}' = {value} exceeds compile-time limit {limit}")]
    LimitExceeded {
        setting: &'static str,
        value: usize,
        limit: usize,
    },

    #[error("Setting '{setting}' is invalid: {reason}")]
    InvalidValue {
        setting: &'static str,
        reason: String,
    },
}

impl ConfigError {
    /// Get the logging code for this error
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::Io { .. } => crate::logging::codes::input::IO_ERROR,
            Self::Toml(_) | Self::Render(_) | Self::InvalidValue { .. } => {
                crate::logging::codes::system::CONFIGURATION_ERROR
            }
            Self::LimitExceeded { .. } => crate::logging::codes::system::CONFIGURATION_LIMIT,
        }
    }
}
