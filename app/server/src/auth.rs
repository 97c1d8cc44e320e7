//! Bearer token verification for the check endpoint.

use axum::http::HeaderMap;

/// Check the Authorization header against the configured token. The header
/// must be exactly `Bearer <token>` (scheme case-insensitive), and an empty
/// configured token denies every request.
pub fn verify_token(headers: &HeaderMap, expected: &str) -> bool {
    if expected.is_empty() {
        return false;
    }

    let Some(value) = headers.get("Authorization").and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let parts: Vec<&str> = value.split_whitespace().collect();
    let [scheme, token] = parts.as_slice() else {
        return false;
    };

    scheme.eq_ignore_ascii_case("bearer") && *token == expected
}
