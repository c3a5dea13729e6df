//! Configuration loader for notifier-rs
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "NOTIFIER_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "NOTIFIER_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "NOTIFIER";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. Built-in defaults
/// 2. `default.toml` - Base configuration (optional)
/// 3. `{environment}.toml` - Environment-specific configuration (optional)
/// 4. `local.toml` - Local overrides (optional)
/// 5. `NOTIFIER_*` environment variables (highest priority)
///
/// Every file is optional so the binary runs with no configuration at all.
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// This reads environment variables to determine:
    /// - Configuration directory (`NOTIFIER_CONFIG_DIR`)
    /// - Specific configuration file (`NOTIFIER_CONFIG_FILE`)
    /// - Application environment (`NOTIFIER_APP_ENV`)
    ///
    /// # Errors
    ///
    /// Returns an error if both `NOTIFIER_CONFIG_DIR` and `NOTIFIER_CONFIG_FILE`
    /// are set, or if `NOTIFIER_APP_ENV` names an unknown environment.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::mutual_exclusivity(
                "NOTIFIER_CONFIG_DIR and NOTIFIER_CONFIG_FILE cannot both be set. \
                 Use NOTIFIER_CONFIG_DIR for layered configuration or \
                 NOTIFIER_CONFIG_FILE for a single configuration file.",
            ));
        }

        Ok(Self {
            config_dir,
            config_file,
            environment: AppEnvironment::from_env()?,
        })
    }

    /// Create a loader for a single, required configuration file
    ///
    /// Environment variable overrides still apply on top of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if `NOTIFIER_APP_ENV` names an unknown environment.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Ok(Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path.into()),
            environment: AppEnvironment::from_env()?,
        })
    }

    /// Override the environment used to pick `{environment}.toml`
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load configuration from all sources
    ///
    /// If a single configuration file is set, loads only that file.
    /// Otherwise, performs layered loading from the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The single configuration file is not found
    /// - Configuration parsing fails (including unknown channel names)
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        tracing::debug!(
            environment = %self.environment,
            channels = settings.notifier.channels.len(),
            "Configuration loaded"
        );

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        let builder = if let Some(ref config_file) = self.config_file {
            Self::add_file_source(builder, config_file, true)?
        } else {
            self.build_layered_config(builder)?
        };

        // Environment variables always win: NOTIFIER_NOTIFIER__MESSAGE -> notifier.message
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    /// Build layered configuration from multiple files
    fn build_layered_config(&self, builder: Builder) -> Result<Builder, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        let builder = Self::add_file_source(builder, &default_path, false)?;

        let env_path = self.config_dir.join(self.environment.file_name());
        let builder = Self::add_file_source(builder, &env_path, false)?;

        let local_path = self.config_dir.join("local.toml");
        Self::add_file_source(builder, &local_path, false)
    }

    /// Add a file source to the config builder
    ///
    /// # Arguments
    ///
    /// * `builder` - The config builder to add the source to
    /// * `path` - Path to the configuration file
    /// * `required` - Whether the file is required to exist
    fn add_file_source(
        builder: Builder,
        path: &Path,
        required: bool,
    ) -> Result<Builder, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        let path_str = path.to_str().ok_or_else(|| {
            ConfigError::validation(
                "config_file".to_string(),
                format!("Configuration path is not valid UTF-8: {}", path.display()),
            )
        })?;

        Ok(builder.add_source(File::new(path_str, FileFormat::Toml).required(required)))
    }

    /// Add environment variable source to the config builder
    ///
    /// Environment variables with prefix `NOTIFIER_` are mapped to configuration keys.
    /// Double underscores (`__`) are used as separators for nested keys.
    /// Values stay strings: `007` is a message, not a number. Channel lists
    /// are split by the `notifier.channels` deserializer.
    ///
    /// Examples:
    /// - `NOTIFIER_NOTIFIER__MESSAGE` -> `notifier.message`
    /// - `NOTIFIER_NOTIFIER__CHANNELS=email,slack` -> `notifier.channels`
    /// - `NOTIFIER_LOGGER__LEVEL` -> `logger.level`
    fn add_env_source(builder: Builder) -> Builder {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::ChannelKind;
    use crate::config::TEST_MUTEX;
    use std::fs;
    use tempfile::TempDir;

    /// Helper to create a temporary config directory with files
    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            let path = temp_dir.path().join(name);
            fs::write(&path, content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Helper to safely set environment variables for a test
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::remove_var(key);
            }
        }

        /// Clear every variable the loader reads
        fn clear_all(&mut self) {
            for key in [
                "NOTIFIER_CONFIG_DIR",
                "NOTIFIER_CONFIG_FILE",
                "NOTIFIER_APP_ENV",
                "NOTIFIER_NOTIFIER__MESSAGE",
                "NOTIFIER_NOTIFIER__CHANNELS",
                "NOTIFIER_LOGGER__LEVEL",
                "NOTIFIER_LOGGER__COLORED",
            ] {
                self.remove(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_config_loader_new_default() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir, PathBuf::from("config"));
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment, AppEnvironment::Development);
    }

    #[test]
    fn test_config_loader_mutual_exclusivity_error() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();

        env.set("NOTIFIER_CONFIG_DIR", "/custom/config");
        env.set("NOTIFIER_CONFIG_FILE", "/path/to/config.toml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains("NOTIFIER_CONFIG_DIR"));
                assert!(msg.contains("NOTIFIER_CONFIG_FILE"));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_config_loader_environment_from_env() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();
        env.set("NOTIFIER_APP_ENV", "production");

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.environment(), AppEnvironment::Production);
    }

    #[test]
    fn test_config_loader_rejects_unknown_environment() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();
        env.set("NOTIFIER_APP_ENV", "staging");

        assert!(matches!(ConfigLoader::new(), Err(ConfigError::EnvVarError(_))));
        assert!(matches!(
            ConfigLoader::from_file("notifier.toml"),
            Err(ConfigError::EnvVarError(_))
        ));
    }

    #[test]
    fn test_load_without_any_files_uses_defaults() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();

        let temp_dir = setup_config_dir(&[]);
        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_full_precedence_chain() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();

        let default_config = r#"
[application]
name = "default-app"

[notifier]
message = "default message"
channels = ["email", "sms"]

[logger]
level = "info"
"#;

        let development_config = r#"
[application]
name = "dev-app"

[notifier]
message = "dev message"
"#;

        let local_config = r#"
[notifier]
channels = ["slack"]
"#;

        let temp_dir = setup_config_dir(&[
            ("default.toml", default_config),
            ("development.toml", development_config),
            ("local.toml", local_config),
        ]);

        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());
        env.set("NOTIFIER_LOGGER__LEVEL", "warn");

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");

        // Environment variable has highest priority
        assert_eq!(settings.logger.level, "warn");
        // local.toml overrides default.toml
        assert_eq!(settings.notifier.channels, vec![ChannelKind::Slack]);
        // development.toml overrides default.toml
        assert_eq!(settings.application.name, "dev-app");
        assert_eq!(settings.notifier.message, "dev message");
        // built-in defaults fill the rest
        assert_eq!(settings.logger.format, "full");
    }

    #[test]
    fn test_environment_file_only_for_selected_environment() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();

        let temp_dir = setup_config_dir(&[(
            "production.toml",
            "[notifier]\nmessage = \"prod\"\n",
        )]);
        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());

        let dev = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(dev.notifier.message, "¡Alerta de seguridad!");

        let prod = ConfigLoader::new()
            .unwrap()
            .with_environment(AppEnvironment::Production)
            .load()
            .unwrap();
        assert_eq!(prod.notifier.message, "prod");
    }

    #[test]
    fn test_env_var_channel_list() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();

        let temp_dir = setup_config_dir(&[]);
        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());
        env.set("NOTIFIER_NOTIFIER__CHANNELS", "whatsapp,email");
        env.set("NOTIFIER_NOTIFIER__MESSAGE", "desde el entorno");

        let settings = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(
            settings.notifier.channels,
            vec![ChannelKind::WhatsApp, ChannelKind::Email]
        );
        assert_eq!(settings.notifier.message, "desde el entorno");
    }

    #[test]
    fn test_env_var_message_is_not_coerced() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();

        let temp_dir = setup_config_dir(&[]);
        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());

        for message in ["007", "1.50", "true", "1e3"] {
            env.set("NOTIFIER_NOTIFIER__MESSAGE", message);
            let settings = ConfigLoader::new().unwrap().load().unwrap();
            assert_eq!(settings.notifier.message, message);
        }
    }

    #[test]
    fn test_env_var_single_channel_and_bool() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();

        let temp_dir = setup_config_dir(&[]);
        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());
        env.set("NOTIFIER_NOTIFIER__CHANNELS", "slack");
        env.set("NOTIFIER_LOGGER__COLORED", "false");

        let settings = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(settings.notifier.channels, vec![ChannelKind::Slack]);
        assert!(!settings.logger.colored);
    }

    #[test]
    fn test_load_single_file_mode() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();

        let temp_dir = setup_config_dir(&[(
            "single.toml",
            "[notifier]\nmessage = \"single\"\nchannels = []\n",
        )]);

        let settings = ConfigLoader::from_file(temp_dir.path().join("single.toml"))
            .unwrap()
            .load()
            .expect("Should load settings");

        assert_eq!(settings.notifier.message, "single");
        assert!(settings.notifier.channels.is_empty());
    }

    #[test]
    fn test_load_single_file_missing() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();

        let result = ConfigLoader::from_file("/definitely/not/here.toml")
            .unwrap()
            .load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_rejects_unknown_channel() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();

        let temp_dir = setup_config_dir(&[(
            "default.toml",
            "[notifier]\nchannels = [\"carrier-pigeon\"]\n",
        )]);
        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());

        let result = ConfigLoader::new().unwrap().load();
        match result {
            Err(ConfigError::ParseError(msg)) => assert!(msg.contains("carrier-pigeon")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_invalid_level() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_all();

        let temp_dir = setup_config_dir(&[("default.toml", "[logger]\nlevel = \"loud\"\n")]);
        env.set("NOTIFIER_CONFIG_DIR", temp_dir.path().to_str().unwrap());

        let result = ConfigLoader::new().unwrap().load();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
