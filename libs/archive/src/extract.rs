use chrono::DateTime;
use scraper::{Html, Selector};
use serde::Deserialize;

use crate::{models::Article, ArchiveError, Result};

/// Marker used to skip unrelated script blocks (analytics, config blobs)
/// without attempting a JSON parse.
const ARTICLE_MARKER: &str = "datePublished";

#[derive(Debug, Deserialize)]
struct LdArticle {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "mainEntityOfPage")]
    main_entity_of_page: Option<LdMainEntity>,
    #[serde(default, rename = "datePublished")]
    date_published: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LdMainEntity {
    #[serde(default, rename = "@id")]
    id: Option<String>,
}

/// Extract every article announced by a JSON-LD script block in the page.
pub(crate) fn extract_articles(html: &str) -> Result<Vec<Article>> {
    let document = Html::parse_document(html);
    let script_selector =
        Selector::parse("script").map_err(|e| ArchiveError::Parse(e.to_string()))?;

    let mut articles = Vec::new();
    for script in document.select(&script_selector) {
        let text = script.text().collect::<String>();
        if !text.contains(ARTICLE_MARKER) {
            continue;
        }
        if let Some(article) = article_from_script(&text)? {
            articles.push(article);
        }
    }
    Ok(articles)
}

/// Build an article from one JSON-LD block. A block that is not valid JSON
/// is an error; one missing a required field or carrying an unparseable
/// date yields no article.
fn article_from_script(text: &str) -> Result<Option<Article>> {
    let data: LdArticle = serde_json::from_str(text)?;

    let (Some(title), Some(url), Some(raw_date)) = (
        data.name,
        data.main_entity_of_page.and_then(|m| m.id),
        data.date_published,
    ) else {
        return Ok(None);
    };

    let date_published = match DateTime::parse_from_rfc3339(&raw_date) {
        Ok(date) => date,
        Err(e) => {
            tracing::debug!(
                "[Archive] Skipping block with bad datePublished {:?}: {}",
                raw_date,
                e
            );
            return Ok(None);
        }
    };

    Ok(Some(Article {
        title,
        url,
        date_published,
    }))
}
