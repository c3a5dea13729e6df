//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::services::notifications::ChannelKind;

/// Send notifications through a stack of channel decorators
#[derive(Parser, Debug)]
#[command(name = "notifier-rs")]
#[command(about = "Send notifications through a stack of channel decorators")]
#[command(long_about = "
notifier-rs sends a message through a chain of notification channels.
The chain starts at a base notifier; each channel wraps the chain built so far,
so output unwinds innermost-first: the standard line, then one line per channel
in the order the channels were added.

EXAMPLES:
    # Send the default alert through Base, Email, SMS, Facebook, Slack, WhatsApp
    notifier-rs

    # Send a custom message through email and slack only
    notifier-rs send --message \"Server down\" --channel email --channel slack

    # Channels may also be comma-separated
    notifier-rs send --channel sms,whatsapp

    # Run the annotated demonstration
    notifier-rs demo

    # List the available channels
    notifier-rs channels

    # Use a custom configuration file with verbose logging on stderr
    notifier-rs --config /path/to/notifier.toml --verbose send
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute (defaults to `send`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load this single TOML file instead of the layered configuration
    /// directory. The file must exist and be readable.
    ///
    /// Example: --config /etc/notifier-rs/notifier.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` is layered over `default.toml`.
    /// Without this flag the loader reads NOTIFIER_APP_ENV, which must hold
    /// one of the same values when set.
    ///
    /// Available values: development (dev), production (prod), test
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Raises log output on stderr to debug level, showing each layer
    /// of the chain as it emits. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error log output
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a message through the notification chain (default)
    ///
    /// Channels given on the command line replace the configured chain.
    /// Only notification lines are written to stdout.
    ///
    /// Examples:
    ///   notifier-rs send                                  # Configured chain and message
    ///   notifier-rs send -m "Hola" --channel email,slack  # Custom message and chain
    ///   notifier-rs send --no-channels                    # Base notifier only
    Send {
        /// Message to send
        #[arg(short, long, value_name = "TEXT")]
        message: Option<String>,

        /// Channel to wrap the chain with, in wrapping order
        ///
        /// Repeat the flag or separate names with commas. The first channel
        /// wraps the base notifier directly.
        ///
        /// Available channels: email (correo), sms, facebook, slack, whatsapp
        #[arg(
            long = "channel",
            value_name = "CHANNEL",
            value_delimiter = ',',
            value_parser = super::validation::validate_channel,
            conflicts_with = "no_channels"
        )]
        channels: Vec<ChannelKind>,

        /// Send through the base notifier only
        #[arg(long)]
        no_channels: bool,

        /// Log level override
        ///
        /// Overrides both configuration file settings and --verbose/--quiet.
        ///
        /// Available levels: error, warn, info, debug, trace
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,
    },
    /// Run the annotated demonstration of the decorator chain
    ///
    /// Prints a header, the execution order, the notification lines, a footer
    /// and a summary of why stacking decorators is useful.
    Demo {
        /// Message to send during the demonstration
        #[arg(short, long, value_name = "TEXT")]
        message: Option<String>,
    },
    /// List the available channels
    Channels,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "production", alias = "prod")]
    Production,
    #[value(name = "test")]
    Test,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Production => crate::config::Environment::Production,
            Environment::Test => crate::config::Environment::Test,
        }
    }
}
