//! The channel abstraction the publisher writes through.

use crate::render::Document;
use async_trait::async_trait;
use statusboard_common::{MessageId, StatusBoardError};
use thiserror::Error;

/// Failures while publishing the board.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The referenced message no longer exists (deleted externally).
    #[error("message {0} no longer exists")]
    MessageNotFound(MessageId),

    /// Any other platform or network failure.
    #[error("{message}")]
    Platform {
        /// Description from the platform.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The new message id could not be persisted.
    #[error(transparent)]
    Storage(#[from] StatusBoardError),
}

impl PublishError {
    /// Wraps a platform error.
    pub fn platform(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Platform {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

/// A place the board can be displayed, such as a Discord text channel.
///
/// Each method is a single network call; implementations do not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardChannel: Send + Sync {
    /// Confirms that message `id` still exists.
    ///
    /// Returns [`PublishError::MessageNotFound`] if it was deleted.
    async fn fetch_message(&self, id: MessageId) -> Result<(), PublishError>;

    /// Replaces the content of message `id` with `document`.
    async fn edit_message(&self, id: MessageId, document: &Document) -> Result<(), PublishError>;

    /// Posts `document` as a new message and returns its id.
    async fn send_message(&self, document: &Document) -> Result<MessageId, PublishError>;
}
