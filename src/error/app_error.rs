use thiserror::Error;

use crate::config::error::ConfigError;
use crate::logger::LoggerError;

/// Application-wide error type.
///
/// Sending a notification never fails; these variants cover the ambient
/// failures around it: channel names, configuration and writing the
/// transcript out.
#[derive(Error, Debug)]
pub enum AppError {
    /// A setting or argument with an unacceptable value
    #[error("Invalid value for '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// A channel name that does not match any known channel
    #[error("Unknown channel '{name}'. Valid channels are: email, sms, facebook, slack, whatsapp")]
    UnknownChannel { name: String },

    /// Configuration could not be located or read
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Failure writing notification output
    #[error("Failed to write notification output")]
    Output {
        #[from]
        source: std::io::Error,
    },

    /// Process setup failed outside the caller's control
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::ValidationError { field, message } => AppError::Validation {
                field,
                reason: message,
            },
            ConfigError::FileNotFound(_) => AppError::Configuration {
                key: "config_file".to_string(),
                source: error.into(),
            },
            ConfigError::EnvVarError(_) => AppError::Configuration {
                key: "NOTIFIER_APP_ENV".to_string(),
                source: error.into(),
            },
            ConfigError::MutualExclusivityError(_) => AppError::Configuration {
                key: "NOTIFIER_CONFIG_DIR/NOTIFIER_CONFIG_FILE".to_string(),
                source: error.into(),
            },
            other => AppError::Configuration {
                key: "settings".to_string(),
                source: other.into(),
            },
        }
    }
}

impl From<LoggerError> for AppError {
    fn from(error: LoggerError) -> Self {
        match error {
            LoggerError::Config { message } => AppError::Validation {
                field: "logger".to_string(),
                reason: message,
            },
            already @ LoggerError::AlreadyInitialized(_) => AppError::Internal {
                source: already.into(),
            },
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
