//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use statusboard_common::{ChannelId, LoggingConfig, UserId};
use std::fmt;
use std::path::PathBuf;

/// Main configuration structure for the status board bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Liveness HTTP server configuration.
    pub server: ServerConfig,
    /// Board state storage configuration.
    pub storage: StorageConfig,
    /// Logging configuration.
    pub logging: LogSettings,
}

/// Discord bot configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Channel holding the status board message.
    pub channel_id: ChannelId,
    /// Users allowed to run mutating commands.
    pub admin_ids: Vec<UserId>,
}

// Keeps the token out of logs.
impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &if self.token.is_empty() { "<unset>" } else { "<redacted>" })
            .field("channel_id", &self.channel_id)
            .field("admin_ids", &self.admin_ids)
            .finish()
    }
}

/// Liveness HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Listening port.
    pub port: u16,
}

/// Board state storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON state file.
    pub path: PathBuf,
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text.
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file; stdout when unset.
    pub file: Option<String>,
}

impl Config {
    /// Logging setup derived from this configuration.
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.logging.level.clone(),
            json_format: self.logging.format == LogFormat::Json,
            file_path: self.logging.file.clone(),
            ..LoggingConfig::default()
        }
    }

    /// Address the liveness server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
