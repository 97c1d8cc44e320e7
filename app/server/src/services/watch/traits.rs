//! Trait abstractions for the watch service.
//!
//! These traits let tests stand in for the archive, the mailer and the
//! persisted check time.

use archive::Article;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

/// Error type for watch operations
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("Archive error: {0}")]
    Archive(String),
    #[error("Notify error: {0}")]
    Notify(String),
    #[error("Store error: {0}")]
    Store(String),
}

impl From<archive::ArchiveError> for WatchError {
    fn from(e: archive::ArchiveError) -> Self {
        WatchError::Archive(e.to_string())
    }
}

impl From<crate::notify::NotifyError> for WatchError {
    fn from(e: crate::notify::NotifyError) -> Self {
        WatchError::Notify(e.to_string())
    }
}

impl From<crate::services::LastCheckedError> for WatchError {
    fn from(e: crate::services::LastCheckedError) -> Self {
        WatchError::Store(e.to_string())
    }
}

/// Outcome of one check pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Nothing published since the last check
    NoNewArticles,
    /// A notification went out for this many articles
    Notified { count: usize },
}

/// Trait for fetching the article archive
#[async_trait]
pub trait ArchiveSource: Send + Sync {
    /// Fetch every article the archive currently lists
    async fn fetch_articles(&self) -> Result<Vec<Article>, WatchError>;
}

/// Trait for delivering a new-articles notification
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification for the given articles
    async fn notify(&self, articles: &[Article]) -> Result<(), WatchError>;
}

/// Trait for the persisted last-checked timestamp
#[async_trait]
pub trait LastCheckedStore: Send + Sync {
    /// Read the stored timestamp, if any
    async fn get(&self) -> Option<DateTime<FixedOffset>>;

    /// Persist a new timestamp
    async fn set(&self, timestamp: DateTime<FixedOffset>) -> Result<(), WatchError>;
}
