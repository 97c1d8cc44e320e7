use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::services::watch::to_listing_article;
use crate::state::AppState;

/// Articles published within the last week, newest first, with titles
/// decoded and dates formatted for display.
pub async fn list_articles(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<listing::Article>>> {
    let articles = state.watch.recent_articles().await?;
    Ok(Json(articles.iter().map(to_listing_article).collect()))
}
