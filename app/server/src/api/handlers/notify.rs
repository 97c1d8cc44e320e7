use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::auth::verify_token;
use crate::error::{AppError, AppResult};
use crate::services::watch::CheckOutcome;
use crate::state::AppState;

/// Runs a check cycle on demand. Bearer-token protected.
pub async fn run_check(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    if !verify_token(&headers, &state.config.api_token) {
        return Err(AppError::unauthorized(
            "Unauthorized - Invalid or missing token",
        ));
    }

    match state.watch.check_and_notify().await? {
        CheckOutcome::NoNewArticles => Ok(StatusCode::NO_CONTENT.into_response()),
        CheckOutcome::Notified { .. } => {
            Ok((StatusCode::OK, Json(json!({"status": "success"}))).into_response())
        }
    }
}
