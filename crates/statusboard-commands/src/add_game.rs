//! `/addgame` command.

use crate::channel::SerenityChannel;
use crate::choice::StatusChoice;
use crate::framework::{reply_private, Context, Error};
use crate::handlers::{apply_add, commit};
use crate::permissions::admin_only;
use tracing::info;

/// Add a new game to track
#[poise::command(slash_command, rename = "addgame", check = "admin_only")]
pub async fn add_game(
    ctx: Context<'_>,
    #[description = "Game name to add"] name: String,
    #[description = "Initial status"] status: StatusChoice,
) -> Result<(), Error> {
    info!("/addgame '{}' {:?} by user {}", name, status, ctx.author().id);
    ctx.defer_ephemeral().await?;

    let data = ctx.data();
    let reply = {
        let _guard = data.store.lock().await;
        let mut state = data.store.load().await;
        let transition = apply_add(&mut state, &name, status.into());
        commit(&data.store, &mut state, transition, &SerenityChannel::for_context(ctx)).await?
    };

    reply_private(ctx, reply).await
}
