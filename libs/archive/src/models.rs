use chrono::{DateTime, FixedOffset};
use serde::Serialize;

const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub date_published: DateTime<FixedOffset>,
}

impl Article {
    /// Title with HTML entities decoded, e.g. `Fish &amp; Chips` becomes
    /// `Fish & Chips`. Archive pages store titles entity-encoded.
    pub fn pretty_title(&self) -> String {
        html_escape::decode_html_entities(&self.title).into_owned()
    }

    /// Publication date formatted for display, in the article's own offset.
    pub fn pretty_date(&self) -> String {
        self.date_published.format(DISPLAY_DATE_FORMAT).to_string()
    }
}
