//! Runtime validation of a loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use tracing::warn;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    ///
    /// A missing token is fatal. An empty admin list is allowed but leaves
    /// every mutating command unusable, so it is logged.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.discord.token.trim().is_empty() {
            return Err(ConfigError::MissingConfig(
                "DISCORD_TOKEN must be set to the bot token".to_string(),
            ));
        }

        if config.discord.channel_id.0 == 0 {
            return Err(ConfigError::Invalid(
                "CHANNEL_ID must be a non-zero Discord channel id".to_string(),
            ));
        }

        if config.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "STATUS_FILE must not be empty".to_string(),
            ));
        }

        if config.discord.admin_ids.is_empty() {
            warn!("Admin allow-list is empty; mutating commands will be denied for everyone");
        }

        Ok(())
    }
}
