use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed endpoint returned {status_code}: {message}")]
    Status { status_code: u16, message: String },
    #[error("invalid feed body at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("feed source failed: {0}")]
    Source(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template render failed: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
