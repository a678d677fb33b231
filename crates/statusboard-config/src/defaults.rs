//! Default values for every configuration section.

use crate::schema::*;
use statusboard_common::{ChannelId, UserId};
use std::path::PathBuf;

/// Channel the board is published to when `CHANNEL_ID` is unset.
pub const DEFAULT_CHANNEL_ID: u64 = 1_379_286_990_477_983_795;

/// Liveness server port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Location of the persisted board state when `STATUS_FILE` is unset.
pub const DEFAULT_STATUS_FILE: &str = "data/status.json";

/// Admin allow-list when `ADMIN_IDS` is unset.
pub const DEFAULT_ADMIN_IDS: [u64; 2] = [550_322_941_250_895_882, 311_036_928_910_950_401];

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            logging: LogSettings::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            channel_id: ChannelId(DEFAULT_CHANNEL_ID),
            admin_ids: DEFAULT_ADMIN_IDS.iter().copied().map(UserId).collect(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STATUS_FILE),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            file: None,
        }
    }
}
