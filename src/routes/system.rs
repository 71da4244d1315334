use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
    });
    (StatusCode::OK, Json(body))
}

/// Calendar sync is simulated; the endpoint reports an already-connected
/// state without any OAuth round trip.
#[axum::debug_handler]
pub async fn calendar_auth() -> impl IntoResponse {
    let body = json!({
        "authUrl": "#",
        "message": "In production, this would redirect to Google OAuth. For demo purposes, calendar sync is simulated.",
        "connected": true,
    });
    (StatusCode::OK, Json(body))
}
