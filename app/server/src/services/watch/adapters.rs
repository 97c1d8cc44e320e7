//! Bridges between the archive, the watch service, and the listing loader.

use std::sync::Arc;

use archive::{Article, ArchiveClient};
use async_trait::async_trait;

use super::traits::{ArchiveSource, WatchError};
use super::WatchService;

/// Archive source backed by the HTTP archive client.
pub struct DefaultArchiveSource {
    client: Arc<ArchiveClient>,
}

impl DefaultArchiveSource {
    pub fn new(client: Arc<ArchiveClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArchiveSource for DefaultArchiveSource {
    async fn fetch_articles(&self) -> Result<Vec<Article>, WatchError> {
        Ok(self.client.fetch_all().await?)
    }
}

/// Feed source that serves the watch service's recent articles directly,
/// so in-process rendering skips the loopback HTTP hop.
pub struct ServiceSource {
    watch: Arc<WatchService>,
}

impl ServiceSource {
    pub fn new(watch: Arc<WatchService>) -> Self {
        Self { watch }
    }
}

#[async_trait]
impl listing::ArticleSource for ServiceSource {
    async fn fetch_articles(&self) -> Result<Vec<listing::Article>, listing::FeedError> {
        let articles = self
            .watch
            .recent_articles()
            .await
            .map_err(|e| listing::FeedError::Source(e.to_string()))?;
        Ok(articles.iter().map(to_listing_article).collect())
    }
}

/// Display form of an archive article: entities decoded and the date
/// formatted for readers.
pub(crate) fn to_listing_article(article: &Article) -> listing::Article {
    listing::Article {
        url: article.url.clone(),
        title: article.pretty_title(),
        date_published: article.pretty_date(),
    }
}
