use serde::{Deserialize, Serialize};

/// One article as served by the feed endpoint. Every field arrives
/// pre-formatted; the date is display text and is never parsed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub date_published: String,
}
