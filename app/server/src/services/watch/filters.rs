//! Article sorting and date filtering.

use archive::Article;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use chrono_tz::America::Los_Angeles;

/// Now in the reference timezone, carried as a fixed offset so it compares
/// directly against article dates.
pub(crate) fn now_local() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&Los_Angeles).fixed_offset()
}

/// One week before the given instant.
pub(crate) fn week_ago_from(now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    now - Duration::days(7)
}

/// One week before now. Fallback baseline when no check time is stored.
pub(crate) fn week_ago() -> DateTime<FixedOffset> {
    week_ago_from(now_local())
}

/// Newest publication date first.
pub(crate) fn sort_newest_first(mut articles: Vec<Article>) -> Vec<Article> {
    articles.sort_by(|a, b| b.date_published.cmp(&a.date_published));
    articles
}

/// Keep articles published on or after the cutoff. The bound is inclusive,
/// so an article landing exactly on the stored instant is announced again
/// rather than lost.
pub(crate) fn filter_published_since(
    articles: Vec<Article>,
    since: DateTime<FixedOffset>,
) -> Vec<Article> {
    let before_count = articles.len();
    let kept: Vec<_> = articles
        .into_iter()
        .filter(|article| article.date_published >= since)
        .collect();

    let dropped = before_count - kept.len();
    if dropped > 0 {
        tracing::debug!("Filtered {} articles published before {}", dropped, since);
    }

    kept
}
