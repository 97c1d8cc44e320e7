use std::sync::Arc;

use archive::Article;
use chrono::{DateTime, FixedOffset};

use super::filters::{filter_published_since, now_local, sort_newest_first, week_ago};
use super::traits::{ArchiveSource, CheckOutcome, LastCheckedStore, Notifier, WatchError};

/// Watches the archive for articles newer than the last successful check and
/// pushes a notification when any show up.
pub struct WatchService {
    archive: Arc<dyn ArchiveSource>,
    notifier: Arc<dyn Notifier>,
    store: Arc<dyn LastCheckedStore>,
}

impl WatchService {
    pub fn new(
        archive: Arc<dyn ArchiveSource>,
        notifier: Arc<dyn Notifier>,
        store: Arc<dyn LastCheckedStore>,
    ) -> Self {
        Self {
            archive,
            notifier,
            store,
        }
    }

    /// Articles published within the last week, newest first. Display reads
    /// always use the week window, independent of the notification baseline.
    pub async fn recent_articles(&self) -> Result<Vec<Article>, WatchError> {
        let articles = self.archive.fetch_articles().await?;
        Ok(sort_newest_first(filter_published_since(
            articles,
            week_ago(),
        )))
    }

    /// One full check cycle. The baseline only advances after the notifier
    /// reports success, so a failed send is retried on the next cycle.
    pub async fn check_and_notify(&self) -> Result<CheckOutcome, WatchError> {
        let since = self.baseline().await;
        tracing::info!("[Watch] Checking for articles published since {}", since);

        let articles = self.archive.fetch_articles().await?;
        let new_articles = sort_newest_first(filter_published_since(articles, since));

        if new_articles.is_empty() {
            tracing::info!("[Watch] No new articles found");
            return Ok(CheckOutcome::NoNewArticles);
        }

        tracing::info!("[Watch] Found {} new articles, notifying", new_articles.len());
        self.notifier.notify(&new_articles).await?;
        self.store.set(now_local()).await?;

        Ok(CheckOutcome::Notified {
            count: new_articles.len(),
        })
    }

    async fn baseline(&self) -> DateTime<FixedOffset> {
        match self.store.get().await {
            Some(stored) => stored,
            None => {
                let fallback = week_ago();
                tracing::info!(
                    "[Watch] No stored check time, defaulting to {}",
                    fallback
                );
                fallback
            }
        }
    }
}
