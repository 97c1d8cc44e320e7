//! Mock implementations of the watch traits for testing.

use std::sync::{Arc, Mutex};

use archive::Article;
use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset};

use super::filters::now_local;
use super::traits::{ArchiveSource, LastCheckedStore, Notifier, WatchError};

/// Test article published `days_ago` days before now.
pub(crate) fn create_test_article(title: &str, days_ago: i64) -> Article {
    Article {
        title: title.to_string(),
        url: format!(
            "https://example.com/articles/{}",
            title.to_lowercase().replace(' ', "-")
        ),
        date_published: now_local() - Duration::days(days_ago),
    }
}

// ==================== Mock Archive Source ====================

#[derive(Clone, Default)]
pub(crate) struct MockArchiveSource {
    articles: Arc<Mutex<Vec<Article>>>,
    should_fail: Arc<Mutex<bool>>,
    fetch_count: Arc<Mutex<usize>>,
}

impl MockArchiveSource {
    /// Set the articles the archive returns
    pub fn set_articles(&self, articles: Vec<Article>) {
        *self.articles.lock().unwrap() = articles;
    }

    /// Make fetches fail (for testing error paths)
    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    /// Get the number of fetches performed (for verification)
    pub fn get_fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

#[async_trait]
impl ArchiveSource for MockArchiveSource {
    async fn fetch_articles(&self) -> Result<Vec<Article>, WatchError> {
        *self.fetch_count.lock().unwrap() += 1;
        if *self.should_fail.lock().unwrap() {
            return Err(WatchError::Archive("mock archive failure".to_string()));
        }
        Ok(self.articles.lock().unwrap().clone())
    }
}

// ==================== Mock Notifier ====================

#[derive(Clone, Default)]
pub(crate) struct MockNotifier {
    notifications: Arc<Mutex<Vec<Vec<Article>>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockNotifier {
    /// Make notifications fail (for testing error paths)
    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    /// Get the notifications that were sent (for verification)
    pub fn get_notifications(&self) -> Vec<Vec<Article>> {
        self.notifications.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, articles: &[Article]) -> Result<(), WatchError> {
        if *self.should_fail.lock().unwrap() {
            return Err(WatchError::Notify("mock notify failure".to_string()));
        }
        self.notifications.lock().unwrap().push(articles.to_vec());
        Ok(())
    }
}

// ==================== Mock Last Checked Store ====================

#[derive(Clone, Default)]
pub(crate) struct MockLastCheckedStore {
    stored: Arc<Mutex<Option<DateTime<FixedOffset>>>>,
    set_calls: Arc<Mutex<Vec<DateTime<FixedOffset>>>>,
}

impl MockLastCheckedStore {
    /// Seed the stored check time
    pub fn set_stored(&self, timestamp: DateTime<FixedOffset>) {
        *self.stored.lock().unwrap() = Some(timestamp);
    }

    /// Get the timestamps written to the store (for verification)
    pub fn get_set_calls(&self) -> Vec<DateTime<FixedOffset>> {
        self.set_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LastCheckedStore for MockLastCheckedStore {
    async fn get(&self) -> Option<DateTime<FixedOffset>> {
        *self.stored.lock().unwrap()
    }

    async fn set(&self, timestamp: DateTime<FixedOffset>) -> Result<(), WatchError> {
        self.set_calls.lock().unwrap().push(timestamp);
        *self.stored.lock().unwrap() = Some(timestamp);
        Ok(())
    }
}
