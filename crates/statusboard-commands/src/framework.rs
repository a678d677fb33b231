//! Poise framework setup and command registration logic.

use crate::handlers::{DENIED, GENERIC_ERROR};
use crate::permissions::AdminList;
use crate::selection::PendingSelections;
use statusboard_board::BoardStore;
use statusboard_config::Config;
use std::sync::Arc;
use tracing::{error, warn};

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Board state storage shared by every handler.
    pub store: Arc<BoardStore>,
    /// Users allowed to run mutating commands.
    pub admins: AdminList,
    /// Open `/removegame` selections.
    pub selections: PendingSelections,
}

impl Data {
    /// Builds command data from the loaded configuration and store.
    pub fn new(config: Arc<Config>, store: Arc<BoardStore>) -> Self {
        let admins = AdminList::new(config.discord.admin_ids.iter().copied());
        Self {
            config,
            store,
            admins,
            selections: PendingSelections::new(),
        }
    }
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Every slash command the bot registers.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        crate::add_game::add_game(),
        crate::set_status::set_status(),
        crate::remove_game::remove_game(),
        crate::update_board::update_board(),
        crate::list_games::list_games(),
    ]
}

/// Creates a new Poise framework.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: commands(),
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    })
}

/// Sends `content` as a reply only the invoking user can see.
pub async fn reply_private(ctx: Context<'_>, content: impl Into<String>) -> Result<(), Error> {
    ctx.send(
        poise::CreateReply::default()
            .content(content)
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// Global error handler for the framework.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::CommandCheckFailed { error, ctx, .. } => {
            if let Some(error) = error {
                error!("Check for '{}' failed: {:?}", ctx.command().name, error);
            }
            warn!(
                "User {} is not allowed to run '{}'",
                ctx.author().id,
                ctx.command().name
            );
            if let Err(e) = reply_private(ctx, DENIED).await {
                error!("Failed to send permission denial: {:?}", e);
            }
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command '{}': {:?}", ctx.command().name, error);
            if let Err(e) = reply_private(ctx, GENERIC_ERROR).await {
                error!("Failed to send error reply: {:?}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {:?}", e);
            }
        }
    }
}
