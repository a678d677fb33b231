//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use crate::health::HealthState;
use poise::serenity_prelude as serenity;
use statusboard_board::{publish_state, BoardChannel, BoardStore, PublishError};
use statusboard_commands::{create_framework, Data, SerenityChannel};
use statusboard_common::MessageId;
use statusboard_config::Config;
use std::sync::Arc;
use tracing::{error, info};

/// Main bot structure.
pub struct StatusBoardBot {
    config: Arc<Config>,
    store: Arc<BoardStore>,
    health: HealthState,
}

impl StatusBoardBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(BoardStore::new(&config.storage.path));
        let health = HealthState::new(store.clone(), config.discord.channel_id);
        Self {
            config: Arc::new(config),
            store,
            health,
        }
    }

    /// State shared with the liveness endpoint.
    pub fn health(&self) -> HealthState {
        self.health.clone()
    }

    /// Board state storage.
    pub fn store(&self) -> Arc<BoardStore> {
        self.store.clone()
    }

    /// Connects to Discord and runs until the gateway shuts down.
    pub async fn start(&self) -> BotResult<()> {
        let config = self.config.clone();
        let store = self.store.clone();
        let health = self.health.clone();

        let framework = create_framework()
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!("Connected as {}", ready.user.name);
                    health.set_identity(ready.user.name.clone());

                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    info!("Registered {} commands", framework.options().commands.len());

                    let channel = SerenityChannel::new(ctx.http.clone(), config.discord.channel_id);
                    if let Err(e) = publish_current_board(&store, &channel).await {
                        error!("Failed to publish status board on startup: {}", e);
                    }

                    Ok(Data::new(config, store))
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(
            &self.config.discord.token,
            serenity::GatewayIntents::non_privileged(),
        )
        .framework(framework)
        .await?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {:?}", e);
                return;
            }
            info!("Received shutdown signal, disconnecting");
            shard_manager.shutdown_all().await;
        });

        client.start().await?;
        info!("Discord client has shut down");
        Ok(())
    }
}

/// Publishes the stored board, persisting the message id if it changed.
pub async fn publish_current_board<C>(
    store: &BoardStore,
    channel: &C,
) -> Result<MessageId, PublishError>
where
    C: BoardChannel + ?Sized,
{
    let _guard = store.lock().await;
    let mut state = store.load().await;
    let id = publish_state(store, &mut state, channel).await?;
    info!(
        "Status board with {} entries published as message {}",
        state.games.len(),
        id
    );
    Ok(id)
}
