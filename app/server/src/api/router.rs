use axum::Router;

use crate::state::AppState;

use super::handlers;

pub fn create_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        // Home page and on-demand check
        .route("/", get(handlers::home_page).post(handlers::run_check))
        // Article feed consumed by the page
        .route("/articles", get(handlers::list_articles))
        .with_state(state)
}
