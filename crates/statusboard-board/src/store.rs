//! JSON file persistence for the board state.

use crate::mapping::BoardState;
use statusboard_common::{Result, StatusBoardError};
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Reads and writes the single JSON document holding the board state.
///
/// Command handlers hold [`BoardStore::lock`] across their whole
/// load → mutate → save → publish sequence so two invocations cannot
/// interleave and lose an edit.
#[derive(Debug)]
pub struct BoardStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl BoardStore {
    /// Creates a store backed by `path`. Nothing is read until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes access to the state for one command invocation.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    /// Loads the state, falling back to an empty state if the file is
    /// missing, unreadable or not valid JSON. Never fails.
    pub async fn load(&self) -> BoardState {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No board state at {}, starting empty", self.path.display());
                return BoardState::default();
            }
            Err(e) => {
                warn!("Could not read board state {}: {}", self.path.display(), e);
                return BoardState::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                warn!(
                    "Board state {} is not valid, starting empty: {}",
                    self.path.display(),
                    e
                );
                BoardState::default()
            }
        }
    }

    /// Writes the full state, replacing the previous contents.
    ///
    /// Creates the containing directory if needed. The document is written to
    /// a sibling temporary file and renamed over the target.
    pub async fn save(&self, state: &BoardState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StatusBoardError::storage(format!("failed to create {}", parent.display()), e)
            })?;
        }

        let json = serde_json::to_string_pretty(state)?;
        let tmp = self.temp_path();

        tokio::fs::write(&tmp, json).await.map_err(|e| {
            StatusBoardError::storage(format!("failed to write {}", tmp.display()), e)
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            StatusBoardError::storage(format!("failed to replace {}", self.path.display()), e)
        })?;

        debug!(
            "Saved board state with {} entries to {}",
            state.games.len(),
            self.path.display()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
