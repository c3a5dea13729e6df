//! Configuration settings structures for notifier-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{LogFormat, LoggerConfig};
use crate::services::notifications::{ChainBuilder, ChannelKind, DEFAULT_CHANNELS, DEFAULT_MESSAGE};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "notifier-rs".to_string()
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

fn default_channels() -> Vec<ChannelKind> {
    DEFAULT_CHANNELS.to_vec()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

/// Accepts `["email", "sms"]` from TOML and `email,sms` from the environment
fn deserialize_channels<'de, D>(deserializer: D) -> Result<Vec<ChannelKind>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ChannelsVisitor;

    impl<'de> Visitor<'de> for ChannelsVisitor {
        type Value = Vec<ChannelKind>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a list of channel names or a comma-separated string")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| name.parse::<ChannelKind>().map_err(E::custom))
                .collect()
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut channels = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(channel) = seq.next_element()? {
                channels.push(channel);
            }
            Ok(channels)
        }
    }

    deserializer.deserialize_any(ChannelsVisitor)
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

// ============================================================================
// Notifier Configuration
// ============================================================================

/// Notification chain configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Message sent through the chain
    #[serde(default = "default_message")]
    pub message: String,

    /// Channels in wrapping order; the first wraps the base notifier directly
    #[serde(default = "default_channels", deserialize_with = "deserialize_channels")]
    pub channels: Vec<ChannelKind>,
}

impl NotifierConfig {
    /// Chain builder for the configured channels
    pub fn chain(&self) -> ChainBuilder {
        ChainBuilder::from_channels(&self.channels)
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            message: default_message(),
            channels: default_channels(),
        }
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to use colored output when stderr is a terminal
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_true(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to LoggerConfig
    ///
    /// This method transforms the configuration file representation into
    /// the runtime LoggerConfig used by the logger module.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self.parse_format()?;

        LoggerConfig::new(self.level, format, self.colored).map_err(|e| {
            ConfigError::ValidationError {
                field: "logger".to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Parse the format string into LogFormat enum
    fn parse_format(&self) -> Result<LogFormat, ConfigError> {
        self.format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: e.to_string(),
            })
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Notification chain configuration
    #[serde(default)]
    pub notifier: NotifierConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}
