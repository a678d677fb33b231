//! Short-lived sessions for the `/removegame` selection menu.

use dashmap::DashMap;
use statusboard_common::UserId;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// How long a removal menu stays answerable.
pub const SELECTION_TIMEOUT: Duration = Duration::from_secs(60);

/// Why a selection response was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No open selection for this interaction.
    #[error("this selection is no longer active")]
    Unknown,
    /// The selection timed out before the response arrived.
    #[error("this selection has expired")]
    Expired,
    /// Someone other than the invoking user answered.
    #[error("this selection belongs to another user")]
    WrongUser,
}

/// One open removal menu.
#[derive(Debug, Clone)]
pub struct PendingSelection {
    /// User who opened the menu.
    pub user: UserId,
    /// Names offered in the menu.
    pub offered: Vec<String>,
    /// When the menu stops accepting responses.
    pub expires_at: Instant,
}

/// Open selections keyed by the id of the interaction that opened them.
#[derive(Debug)]
pub struct PendingSelections {
    sessions: DashMap<u64, PendingSelection>,
    ttl: Duration,
}

impl Default for PendingSelections {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingSelections {
    /// Creates an empty registry with the standard timeout.
    pub fn new() -> Self {
        Self::with_ttl(SELECTION_TIMEOUT)
    }

    /// Creates an empty registry with a custom timeout.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Timeout applied to new selections.
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of open selections, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no selection is open.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Records a new selection and drops any that have expired.
    pub fn open(&self, interaction: u64, user: UserId, offered: Vec<String>) {
        self.purge_expired();
        let expires_at = Instant::now() + self.ttl;
        self.sessions.insert(
            interaction,
            PendingSelection {
                user,
                offered,
                expires_at,
            },
        );
        debug!("Opened selection {} for user {}", interaction, user);
    }

    /// Consumes the selection for `interaction` on behalf of `user`.
    ///
    /// Returns the chosen names that were actually offered. A response from
    /// another user leaves the selection open.
    pub fn take(
        &self,
        interaction: u64,
        user: UserId,
        chosen: &[String],
    ) -> Result<Vec<String>, SelectionError> {
        let (_, session) = self
            .sessions
            .remove_if(&interaction, |_, session| session.user == user)
            .ok_or_else(|| {
                if self.sessions.contains_key(&interaction) {
                    SelectionError::WrongUser
                } else {
                    SelectionError::Unknown
                }
            })?;

        if Instant::now() >= session.expires_at {
            return Err(SelectionError::Expired);
        }

        Ok(chosen
            .iter()
            .filter(|name| session.offered.contains(name))
            .cloned()
            .collect())
    }

    /// Drops the selection for `interaction`, returning whether it was open.
    pub fn discard(&self, interaction: u64) -> bool {
        self.sessions.remove(&interaction).is_some()
    }

    /// Drops every expired selection, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.expires_at > now);
        let purged = before.saturating_sub(self.sessions.len());
        if purged > 0 {
            debug!("Purged {} expired selections", purged);
        }
        purged
    }
}
