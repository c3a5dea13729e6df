//! Environment selection for layered configuration
//!
//! The environment picks which `{environment}.toml` is layered over
//! `default.toml`. It comes from `--env` or from `NOTIFIER_APP_ENV`; an
//! unset variable means development, an unrecognized one is an error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    /// Environment variable name for reading the current environment
    pub const ENV_VAR: &'static str = "NOTIFIER_APP_ENV";

    /// Every environment, in the order they are listed to users
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Test,
        Environment::Production,
    ];

    /// Read the environment from `NOTIFIER_APP_ENV`
    ///
    /// # Errors
    /// Returns `ConfigError::EnvVarError` if the variable holds an unknown name
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(Self::ENV_VAR).ok().as_deref())
    }

    /// Resolve a raw variable value; unset or blank selects the default
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(name) => name.parse().map_err(|_| {
                ConfigError::EnvVarError(format!(
                    "{}='{}' is not a known environment. Valid values are: {}",
                    Self::ENV_VAR,
                    name,
                    Self::valid_names()
                ))
            }),
        }
    }

    /// Convert the environment to a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }

    /// Name of the file layered over `default.toml` for this environment
    pub fn file_name(&self) -> String {
        format!("{}.toml", self.as_str())
    }

    fn valid_names() -> String {
        Self::ALL.map(|env| env.as_str()).join(", ")
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Environment::Development),
            "prod" => Ok(Environment::Production),
            name => Self::ALL
                .into_iter()
                .find(|env| env.as_str() == name)
                .ok_or_else(|| {
                    ConfigError::EnvVarError(format!(
                        "Invalid environment '{}'. Valid values are: {}",
                        s,
                        Self::valid_names()
                    ))
                }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!("development".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
        assert_eq!("production".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for env in Environment::ALL {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn test_env_value_unset_or_blank_is_development() {
        assert_eq!(Environment::from_env_value(None).unwrap(), Environment::Development);
        assert_eq!(Environment::from_env_value(Some("  ")).unwrap(), Environment::Development);
        assert_eq!(Environment::from_env_value(Some(" test ")).unwrap(), Environment::Test);
    }

    #[test]
    fn test_env_value_unknown_is_rejected() {
        match Environment::from_env_value(Some("staging")) {
            Err(ConfigError::EnvVarError(msg)) => {
                assert!(msg.contains("NOTIFIER_APP_ENV"));
                assert!(msg.contains("staging"));
                assert!(msg.contains("development, test, production"));
            }
            other => panic!("Expected EnvVarError, got {:?}", other),
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(Environment::Production.file_name(), "production.toml");
        assert_eq!(Environment::default().file_name(), "development.toml");
    }
}
