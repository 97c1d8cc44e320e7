//! Persisted timestamp of the last successful notification.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::services::watch::{LastCheckedStore, WatchError};

const STATE_FILE: &str = "last_checked_time.json";

#[derive(Debug, Error)]
pub enum LastCheckedError {
    #[error("state io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("state serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredState {
    last_checked_time: DateTime<FixedOffset>,
}

/// Stores the last check time as a small JSON file, with an in-memory cache
/// so reads never touch the disk after startup.
pub struct LastCheckedService {
    state_path: PathBuf,
    cache: RwLock<Option<DateTime<FixedOffset>>>,
}

impl LastCheckedService {
    pub fn new(state_dir: &Path) -> Result<Self, LastCheckedError> {
        std::fs::create_dir_all(state_dir)?;
        let state_path = state_dir.join(STATE_FILE);
        let stored = Self::load_from_disk(&state_path);
        Ok(Self {
            state_path,
            cache: RwLock::new(stored),
        })
    }

    /// A missing file is the normal first-run state. Anything unreadable is
    /// treated the same way so one bad write never wedges the watcher.
    fn load_from_disk(path: &Path) -> Option<DateTime<FixedOffset>> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(
                    "Failed to read last checked state from {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        match serde_json::from_str::<StoredState>(&raw) {
            Ok(state) => Some(state.last_checked_time),
            Err(e) => {
                tracing::warn!("Ignoring corrupt last checked state in {}: {}", path.display(), e);
                None
            }
        }
    }

    pub async fn get(&self) -> Option<DateTime<FixedOffset>> {
        *self.cache.read().await
    }

    pub async fn set(&self, timestamp: DateTime<FixedOffset>) -> Result<(), LastCheckedError> {
        let state = StoredState {
            last_checked_time: timestamp,
        };
        let json = serde_json::to_string_pretty(&state)?;

        // Write-then-rename keeps the file whole if the process dies mid-write.
        let temp_path = self.state_path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &json).await?;
        tokio::fs::rename(&temp_path, &self.state_path).await?;

        *self.cache.write().await = Some(timestamp);
        tracing::debug!("Recorded last check at {}", timestamp);
        Ok(())
    }
}

#[async_trait]
impl LastCheckedStore for LastCheckedService {
    async fn get(&self) -> Option<DateTime<FixedOffset>> {
        LastCheckedService::get(self).await
    }

    async fn set(&self, timestamp: DateTime<FixedOffset>) -> Result<(), WatchError> {
        Ok(LastCheckedService::set(self, timestamp).await?)
    }
}
