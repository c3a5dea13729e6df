//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};
use crate::error::AppResult;
use std::path::Path;

/// Configuration merger that handles CLI argument integration with file-based configuration
///
/// CLI arguments override configuration file and environment values.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger by loading the configuration selected on the command line
    ///
    /// # Arguments
    /// * `cli` - Parsed CLI arguments; `--config` selects a single file,
    ///   otherwise the layered loader runs for the chosen `--env`
    ///
    /// # Errors
    /// Returns `AppError::Configuration` if a file cannot be loaded and
    /// `AppError::Validation` if a value is rejected
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let loader = match cli.config.as_deref() {
            Some(path) => Self::file_loader(path)?,
            None => ConfigLoader::new()?,
        };

        let loader = match cli.env {
            Some(env) => loader.with_environment(env.into()),
            None => loader,
        };

        Ok(Self::new(loader.load()?))
    }

    /// Build a loader for a single file, checking it is readable first
    fn file_loader(path: &Path) -> Result<ConfigLoader, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!("Configuration path is not a readable file: '{}'", path.display()),
            });
        }

        std::fs::File::open(path).map_err(|e| ConfigError::ValidationError {
            field: "config_file".to_string(),
            message: format!("Cannot read configuration file '{}': {}", path.display(), e),
        })?;

        ConfigLoader::from_file(path)
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// This method applies CLI argument overrides according to the precedence rules:
    /// 1. CLI arguments have highest priority
    /// 2. Configuration file values are used as base
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied
    pub fn merge_cli_args(&self, cli: &Cli) -> AppResult<Settings> {
        let mut config = self.base_config.clone();

        Self::apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            Self::apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    /// Apply global CLI argument overrides
    fn apply_global_overrides(config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    /// Apply command-specific CLI argument overrides
    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        match command {
            Commands::Send {
                message,
                channels,
                no_channels,
                log_level,
            } => {
                if let Some(text) = message {
                    config.notifier.message = text.clone();
                }

                if *no_channels {
                    config.notifier.channels.clear();
                } else if !channels.is_empty() {
                    config.notifier.channels = channels.clone();
                }

                // Command-specific level takes precedence over --verbose/--quiet
                if let Some(level) = log_level {
                    config.logger.level = (*level).into();
                }
            }
            Commands::Demo { message } => {
                if let Some(text) = message {
                    config.notifier.message = text.clone();
                }
            }
            Commands::Channels => {}
        }
    }
}
