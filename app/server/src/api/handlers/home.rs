use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::error::{AppError, AppResult};
use crate::services::watch::week_ago;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    since: String,
    articles_html: String,
}

/// Home page with the recent articles rendered in. A failed load leaves the
/// container empty and the page still serves.
pub async fn home_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let mut container = listing::Container::new();
    state.loader.load_into(&mut container).await;

    let template = HomeTemplate {
        since: week_ago().format("%m/%d/%Y").to_string(),
        articles_html: container.inner_html(),
    };

    let page = template
        .render()
        .map_err(|e| AppError::internal(e.to_string()))?;
    Ok(Html(page))
}
