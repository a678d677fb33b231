//! Main entry point for the status board bot.

use statusboard_bot::{spawn_health_server, BotError, BotResult, StatusBoardBot};
use statusboard_common::init_logging;
use statusboard_config::ConfigLoader;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    let dotenv = dotenvy::dotenv();

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return Err(e.into());
        }
    };
    let _log_guard =
        init_logging(&config.logging_config()).map_err(|e| BotError::Logging(e.to_string()))?;

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }
    info!("Starting status board bot v{}", env!("CARGO_PKG_VERSION"));
    debug!("Configuration: {:?}", config);

    let bot = StatusBoardBot::new(config.clone());
    spawn_health_server(bot.health(), config.bind_address());

    if let Err(e) = bot.start().await {
        error!("Bot stopped with error: {}", e);
        return Err(e);
    }

    Ok(())
}
