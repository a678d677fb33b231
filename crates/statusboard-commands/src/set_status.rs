//! `/setstatus` command.

use crate::channel::SerenityChannel;
use crate::choice::StatusChoice;
use crate::framework::{reply_private, Context, Error};
use crate::handlers::{apply_set_status, commit};
use crate::permissions::admin_only;
use tracing::info;

/// Update the status of a game
#[poise::command(slash_command, rename = "setstatus", check = "admin_only")]
pub async fn set_status(
    ctx: Context<'_>,
    #[description = "Game name to update"] name: String,
    #[description = "New status"] status: StatusChoice,
) -> Result<(), Error> {
    info!("/setstatus '{}' {:?} by user {}", name, status, ctx.author().id);
    ctx.defer_ephemeral().await?;

    let data = ctx.data();
    let reply = {
        let _guard = data.store.lock().await;
        let mut state = data.store.load().await;
        let transition = apply_set_status(&mut state, &name, status.into());
        commit(&data.store, &mut state, transition, &SerenityChannel::for_context(ctx)).await?
    };

    reply_private(ctx, reply).await
}
