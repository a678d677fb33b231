//! Discord text channel as a [`BoardChannel`].

use crate::framework::Context;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use statusboard_board::{BoardChannel, Document, PublishError};
use statusboard_common::{ChannelId, MessageId};
use std::num::NonZeroU64;
use std::sync::Arc;
use tracing::debug;

/// The configured board channel, reached through the Discord HTTP API.
#[derive(Clone)]
pub struct SerenityChannel {
    http: Arc<serenity::Http>,
    channel_id: serenity::ChannelId,
}

impl SerenityChannel {
    /// Wraps `channel_id` using `http` for requests.
    ///
    /// `channel_id` must be non-zero; configuration validation guarantees it.
    pub fn new(http: Arc<serenity::Http>, channel_id: ChannelId) -> Self {
        Self {
            http,
            channel_id: serenity::ChannelId::new(channel_id.0),
        }
    }

    /// The configured board channel for a running command.
    pub fn for_context(ctx: Context<'_>) -> Self {
        Self::new(
            ctx.serenity_context().http.clone(),
            ctx.data().config.discord.channel_id,
        )
    }
}

fn is_not_found(error: &serenity::Error) -> bool {
    match error {
        serenity::Error::Http(http_error) => {
            http_error.status_code().map(|status| status.as_u16()) == Some(404)
        }
        _ => false,
    }
}

/// Discord ids are never zero; a zero id cannot name an existing message.
fn discord_message_id(id: MessageId) -> Result<serenity::MessageId, PublishError> {
    NonZeroU64::new(id.0)
        .map(serenity::MessageId::from)
        .ok_or(PublishError::MessageNotFound(id))
}

#[async_trait]
impl BoardChannel for SerenityChannel {
    async fn fetch_message(&self, id: MessageId) -> Result<(), PublishError> {
        let message_id = discord_message_id(id)?;
        match self.channel_id.message(&*self.http, message_id).await
        {
            Ok(_) => Ok(()),
            Err(e) if is_not_found(&e) => Err(PublishError::MessageNotFound(id)),
            Err(e) => Err(PublishError::platform(e)),
        }
    }

    async fn edit_message(&self, id: MessageId, document: &Document) -> Result<(), PublishError> {
        self.channel_id
            .edit_message(
                &*self.http,
                discord_message_id(id)?,
                serenity::EditMessage::new().embed(document_to_embed(document)),
            )
            .await
            .map_err(PublishError::platform)?;
        debug!("Edited message {} in channel {}", id, self.channel_id);
        Ok(())
    }

    async fn send_message(&self, document: &Document) -> Result<MessageId, PublishError> {
        let message = self
            .channel_id
            .send_message(
                &*self.http,
                serenity::CreateMessage::new().embed(document_to_embed(document)),
            )
            .await
            .map_err(PublishError::platform)?;
        debug!("Sent message {} to channel {}", message.id, self.channel_id);
        Ok(MessageId(message.id.get()))
    }
}

/// Converts a rendered document into a Discord embed.
pub fn document_to_embed(document: &Document) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(document.title.clone())
        .colour(document.colour);

    if let Some(description) = &document.description {
        embed = embed.description(description.clone());
    }
    for field in &document.fields {
        embed = embed.field(field.name.clone(), field.value.clone(), false);
    }
    if let Some(footer) = &document.footer {
        embed = embed.footer(serenity::CreateEmbedFooter::new(footer.clone()));
    }
    if let Some(timestamp) = document
        .timestamp
        .and_then(|at| serenity::Timestamp::from_unix_timestamp(at.timestamp()).ok())
    {
        embed = embed.timestamp(timestamp);
    }

    embed
}
