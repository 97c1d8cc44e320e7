use reqwest::Client;

use crate::{extract, models::Article, Result};

/// Pages to walk before giving up on finding an empty one. An archive that
/// keeps producing articles past this point is misbehaving.
const MAX_ARCHIVE_PAGES: u32 = 100;

pub struct ArchiveClient {
    client: Client,
    base_url: String,
}

impl ArchiveClient {
    /// Create an ArchiveClient over a shared reqwest Client.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch one archive page and extract its articles. A non-success
    /// status means the archive has no such page and reads as empty;
    /// transport failures propagate.
    pub async fn fetch_page(&self, page: u32) -> Result<Vec<Article>> {
        let url = format!("{}?page={}", self.base_url, page);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                "[Archive] Page {} returned {}, treating as end of archive",
                page,
                status
            );
            return Ok(Vec::new());
        }

        let html = response.text().await?;
        extract::extract_articles(&html)
    }

    /// Walk the archive from page 1, stopping at the first page that
    /// yields no articles or once `max_pages` pages have been read.
    pub async fn fetch_pages(&self, max_pages: u32) -> Result<Vec<Article>> {
        let mut articles = Vec::new();
        for page in 1..=max_pages {
            let batch = self.fetch_page(page).await?;
            if batch.is_empty() {
                return Ok(articles);
            }
            articles.extend(batch);
        }

        tracing::warn!(
            "[Archive] Still finding articles after {} pages, stopping walk",
            max_pages
        );
        Ok(articles)
    }

    /// Walk the archive from page 1, stopping at the first page that
    /// yields no articles.
    pub async fn fetch_all(&self) -> Result<Vec<Article>> {
        self.fetch_pages(MAX_ARCHIVE_PAGES).await
    }
}
