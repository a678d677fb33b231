//! Configuration loading from YAML files and environment variables.

use crate::schema::{Config, LogFormat};
use crate::validator::ConfigValidator;
use statusboard_common::{ChannelId, StatusBoardError, UserId};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "STATUSBOARD_CONFIG";

/// Configuration file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Environment variable parsing error.
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name.
        var: String,
        /// Parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Missing required configuration.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// A value is present but unusable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for StatusBoardError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

/// Configuration loader for the application.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the file named by `STATUSBOARD_CONFIG` (or
    /// `config.yaml` if it exists), applies environment overrides and validates.
    pub fn load() -> Result<Config, ConfigError> {
        let file = env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from).or_else(|| {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            default.exists().then(|| default.to_path_buf())
        });

        Self::load_with(file.as_deref(), |var| env::var(var).ok())
    }

    /// Loads configuration from an optional file and an arbitrary variable lookup.
    pub fn load_with<F>(file: Option<&Path>, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match file {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::load_file(path)?
            }
            None => {
                debug!("No configuration file, using defaults");
                Config::default()
            }
        };

        Self::apply_overrides(&mut config, lookup)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Parses a YAML configuration file. Missing sections take their defaults.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Applies environment overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_TOKEN") {
            config.discord.token = token.trim().to_string();
        }

        if let Some(channel) = lookup("CHANNEL_ID") {
            config.discord.channel_id = ChannelId(parse_var("CHANNEL_ID", &channel)?);
        }

        if let Some(admins) = lookup("ADMIN_IDS") {
            config.discord.admin_ids = admins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| parse_var("ADMIN_IDS", s).map(UserId))
                .collect::<Result<_, _>>()?;
        }

        if let Some(port) = lookup("PORT") {
            config.server.port = parse_var("PORT", &port)?;
        }

        if let Some(path) = lookup("STATUS_FILE") {
            config.storage.path = PathBuf::from(path);
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("LOG_FORMAT") {
            config.logging.format = match format.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" | "pretty" => LogFormat::Text,
                other => {
                    return Err(ConfigError::Invalid(format!(
                        "LOG_FORMAT must be 'text' or 'json', got '{other}'"
                    )))
                }
            };
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.logging.file = Some(file).filter(|f| !f.trim().is_empty());
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| ConfigError::EnvParse {
        var: var.to_string(),
        source: Box::new(e),
    })
}
