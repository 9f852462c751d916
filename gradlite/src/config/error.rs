//! Configuration errors.
//!
//! Validation and env loading both report through [`ConfigError`].

use thiserror::Error;

/// Errors produced when building or validating configuration.
///
/// # Variants
///
/// - **Validation**: a value is out of range (e.g. a non-positive learning rate).
///   *When*: [`TrainConfig::validate`](super::TrainConfig::validate).
///   *Recovery*: Fix the value; the message names the rule that failed.
///
/// - **EnvVar**: an environment variable could not be read (e.g. invalid Unicode).
///   *When*: Reading a key with the env helpers.
///
/// - **Parse**: an environment variable was set but is not valid for its type
///   (e.g. `GRADLITE_NUM_STEPS=abc`, or an unknown `GRADLITE_LOSS_REDUCTION`).
///   *Recovery*: Set a valid value or unset it to use the default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration validation failed.
    #[error("config validation: {0}")]
    Validation(String),

    /// Failed to read an environment variable.
    #[error("env var {key}: {message}")]
    EnvVar {
        /// The full environment variable name.
        key: String,
        /// Underlying cause (e.g. not Unicode).
        message: String,
    },

    /// Environment variable was set but could not be parsed.
    #[error("env var {key}={value:?}: {message}")]
    Parse {
        /// The full environment variable name.
        key: String,
        /// The raw value that failed to parse.
        value: String,
        /// Parse failure reason.
        message: String,
    },
}

impl ConfigError {
    /// Returns the short reason, without the key prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ConfigError::Validation(m) => m,
            ConfigError::EnvVar { message, .. } | ConfigError::Parse { message, .. } => message,
        }
    }
}
