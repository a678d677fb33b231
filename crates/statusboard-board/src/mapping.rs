//! Tracked entries and the persisted board state.

use crate::status::Status;
use serde::{Deserialize, Deserializer, Serialize};
use statusboard_common::MessageId;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

/// Errors from mapping mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// An entry with the same name, ignoring case, is already tracked.
    #[error("'{existing}' is already tracked")]
    AlreadyExists {
        /// The stored spelling of the conflicting entry.
        existing: String,
    },

    /// No entry matches the name, ignoring case.
    #[error("'{0}' is not tracked")]
    NotFound(String),
}

/// Result of changing an entry's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// Name as stored (original casing).
    pub name: String,
    /// Status before the change.
    pub previous: Status,
    /// Status after the change.
    pub current: Status,
}

/// Mapping from entry name to status.
///
/// Names are unique ignoring case; lookups, updates and removals match
/// case-insensitively while the casing used when the entry was added is kept
/// for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusMapping {
    entries: BTreeMap<String, Status>,
}

impl StatusMapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored spelling of `name`, matched ignoring case.
    pub fn find_key(&self, name: &str) -> Option<&str> {
        if self.entries.contains_key(name) {
            return self.entries.get_key_value(name).map(|(k, _)| k.as_str());
        }
        let wanted = name.to_lowercase();
        self.entries
            .keys()
            .find(|key| key.to_lowercase() == wanted)
            .map(String::as_str)
    }

    /// Looks up an entry ignoring case.
    pub fn get(&self, name: &str) -> Option<(&str, &Status)> {
        let key = self.find_key(name)?;
        self.entries.get_key_value(key).map(|(k, v)| (k.as_str(), v))
    }

    /// Adds a new entry. Fails if the name is already tracked in any casing.
    pub fn insert_new(&mut self, name: impl Into<String>, status: Status) -> Result<(), MappingError> {
        let name = name.into();
        if let Some(existing) = self.find_key(&name) {
            return Err(MappingError::AlreadyExists {
                existing: existing.to_string(),
            });
        }
        self.entries.insert(name, status);
        Ok(())
    }

    /// Replaces the status of an existing entry, matched ignoring case.
    pub fn set_status(&mut self, name: &str, status: Status) -> Result<StatusChange, MappingError> {
        let key = self
            .find_key(name)
            .map(str::to_string)
            .ok_or_else(|| MappingError::NotFound(name.to_string()))?;

        let previous = self
            .entries
            .insert(key.clone(), status.clone())
            .ok_or_else(|| MappingError::NotFound(name.to_string()))?;

        Ok(StatusChange {
            name: key,
            previous,
            current: status,
        })
    }

    /// Removes an entry matched ignoring case, returning its stored name and status.
    pub fn remove(&mut self, name: &str) -> Option<(String, Status)> {
        let key = self.find_key(name)?.to_string();
        self.entries.remove_entry(&key)
    }

    /// Entries in display order: alphabetical ignoring case, stored name as tiebreak.
    pub fn sorted(&self) -> Vec<(&str, &Status)> {
        let mut entries: Vec<(&str, &Status)> =
            self.entries.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by_cached_key(|(name, _)| (name.to_lowercase(), (*name).to_string()));
        entries
    }
}

impl<S: Into<String>> FromIterator<(S, Status)> for StatusMapping {
    fn from_iter<I: IntoIterator<Item = (S, Status)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Everything persisted between command invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Tracked entries.
    #[serde(default)]
    pub games: StatusMapping,
    /// Last published board message, if any.
    ///
    /// A zero or unreadable id loads as `None`, so the next publish sends a
    /// fresh message instead of discarding the tracked entries.
    #[serde(default, deserialize_with = "lenient_message_id")]
    pub message_id: Option<MessageId>,
}

fn lenient_message_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<MessageId>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match MessageId::deserialize(&value) {
        Ok(MessageId(0)) => Ok(None),
        Ok(id) => Ok(Some(id)),
        Err(e) => {
            warn!("Ignoring unreadable board message id {}: {}", value, e);
            Ok(None)
        }
    }
}
