//! `/updatestatusboard` command.

use crate::channel::SerenityChannel;
use crate::framework::{reply_private, Context, Error};
use crate::handlers::refresh_reply;
use crate::permissions::admin_only;
use statusboard_board::publish_state;
use tracing::{error, info};

/// Manually refresh the status board
#[poise::command(slash_command, rename = "updatestatusboard", check = "admin_only")]
pub async fn update_board(ctx: Context<'_>) -> Result<(), Error> {
    info!("/updatestatusboard by user {}", ctx.author().id);
    ctx.defer_ephemeral().await?;

    let data = ctx.data();
    let result = {
        let _guard = data.store.lock().await;
        let mut state = data.store.load().await;
        publish_state(&data.store, &mut state, &SerenityChannel::for_context(ctx)).await
    };

    if let Err(e) = &result {
        error!("Manual refresh failed: {}", e);
    }
    reply_private(ctx, refresh_reply(&result)).await
}
