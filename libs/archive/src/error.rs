use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("selector parse failed: {0}")]
    Parse(String),
    #[error("invalid article metadata: {0}")]
    Json(#[from] serde_json::Error),
}
