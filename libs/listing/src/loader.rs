use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::{models::Article, render, Container, FeedError, LoadError};

const ARTICLES_PATH: &str = "/articles";

/// Anything that can produce the article list.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_articles(&self) -> Result<Vec<Article>, FeedError>;
}

/// `ArticleSource` over HTTP: one GET against the feed endpoint, no
/// retries, no parameters.
pub struct FeedClient {
    client: Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<Article>, FeedError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FeedError::Status {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| FeedError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}

#[async_trait]
impl ArticleSource for FeedClient {
    async fn fetch_articles(&self) -> Result<Vec<Article>, FeedError> {
        let url = format!("{}{}", self.base_url, ARTICLES_PATH);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }
}

/// Outcome of one load: either the container now shows the fetched list, or
/// it was left exactly as it was.
#[derive(Debug)]
pub enum LoadOutcome {
    Rendered { count: usize },
    Failed { reason: LoadError },
}

pub struct Loader {
    source: Arc<dyn ArticleSource>,
}

impl Loader {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self { source }
    }

    /// Fetch the article list once and render it into the container. Any
    /// failure is logged and leaves the container in its prior state.
    pub async fn load_into(&self, container: &mut Container) -> LoadOutcome {
        match self.try_load(container).await {
            Ok(count) => LoadOutcome::Rendered { count },
            Err(e) => {
                tracing::error!("Error fetching articles: {}", e);
                LoadOutcome::Failed { reason: e }
            }
        }
    }

    async fn try_load(&self, container: &mut Container) -> Result<usize, LoadError> {
        let articles = self.source.fetch_articles().await?;
        render::render(&articles, container)?;
        Ok(articles.len())
    }
}
