/// Application configuration
///
/// One loader serves both the startup run and the migration subcommands so
/// they always resolve the same connection string.
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Configuration file read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "appsettings.toml";

/// Connection profile used when none is named
pub const DEFAULT_CONNECTION: &str = "default_connection";

/// Prefix of environment overrides, e.g. `CODEFIRST_CONNECTION_STRINGS__DEFAULT_CONNECTION`
pub const ENV_PREFIX: &str = "CODEFIRST";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Connection strings keyed by profile name
    #[serde(default)]
    pub connection_strings: HashMap<String, String>,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Load configuration, reading overrides from `env` instead of the
    /// process environment when given
    pub fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                tracing::debug!("loading configuration from {}", path.display());
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with CODEFIRST_, nested with __)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(env),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Resolve a named connection string
    ///
    /// Fails when the profile is missing, blank, or not a valid `SQLite`
    /// connection string. Never touches the database.
    pub fn connection_string(&self, name: &str) -> Result<&str> {
        let value = self
            .connection_strings
            .get(name)
            .or_else(|| self.connection_strings.get(&name.to_lowercase()))
            .map(|value| value.trim())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "connection string '{name}' is not configured (set connection_strings.{name} in {DEFAULT_CONFIG_FILE} or {ENV_PREFIX}_CONNECTION_STRINGS__{})",
                    name.to_uppercase()
                ))
            })?;

        if value.is_empty() {
            return Err(AppError::Config(format!(
                "connection string '{name}' is empty"
            )));
        }

        codefirst_storage::connect_options(value)
            .map_err(|e| AppError::Config(format!("connection string '{name}': {e}")))?;

        Ok(value)
    }
}
