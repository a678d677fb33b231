//! `/listgames` command.

use crate::channel::document_to_embed;
use crate::framework::{reply_private, Context, Error};
use crate::handlers::NOTHING_TRACKED;
use statusboard_board::render_list;
use tracing::info;

/// List all tracked games
#[poise::command(slash_command, rename = "listgames")]
pub async fn list_games(ctx: Context<'_>) -> Result<(), Error> {
    info!("/listgames by user {}", ctx.author().id);

    let state = ctx.data().store.load().await;
    if state.games.is_empty() {
        return reply_private(ctx, NOTHING_TRACKED).await;
    }

    ctx.send(
        poise::CreateReply::default()
            .embed(document_to_embed(&render_list(&state.games)))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}
