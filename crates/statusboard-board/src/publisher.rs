//! Edit-or-send publishing of the rendered board.

use crate::mapping::BoardState;
use crate::render::{render, Document};
use crate::store::BoardStore;
use crate::traits::{BoardChannel, PublishError};
use statusboard_common::MessageId;
use tracing::{debug, info};

/// Displays `document` in `channel`.
///
/// With a `previous` id the existing message is fetched and edited in place;
/// if it was deleted a new message is sent instead. Without one a new
/// message is sent. Returns the id of the message now showing the board.
/// No retries: any other failure is returned as-is.
pub async fn publish<C>(
    channel: &C,
    document: &Document,
    previous: Option<MessageId>,
) -> Result<MessageId, PublishError>
where
    C: BoardChannel + ?Sized,
{
    if let Some(id) = previous {
        match channel.fetch_message(id).await {
            Ok(()) => {
                channel.edit_message(id, document).await?;
                debug!("Edited board message {}", id);
                return Ok(id);
            }
            Err(PublishError::MessageNotFound(_)) => {
                info!("Board message {} was deleted, sending a new one", id);
            }
            Err(e) => return Err(e),
        }
    }

    let id = channel.send_message(document).await?;
    info!("Sent new board message {}", id);
    Ok(id)
}

/// Renders `state`, publishes it and persists the message id if it changed.
///
/// `state` must already be saved; only `message_id` is updated here.
pub async fn publish_state<C>(
    store: &BoardStore,
    state: &mut BoardState,
    channel: &C,
) -> Result<MessageId, PublishError>
where
    C: BoardChannel + ?Sized,
{
    let document = render(&state.games);
    let id = publish(channel, &document, state.message_id).await?;

    if state.message_id != Some(id) {
        state.message_id = Some(id);
        store.save(state).await?;
        debug!("Stored new board message id {}", id);
    }

    Ok(id)
}
