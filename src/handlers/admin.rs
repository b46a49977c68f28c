use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;
use serde_json::json;
use tracing::info;

use crate::models::envelope::Envelope;
use crate::utils::state::AppState;

/// Wipes every cache entry unconditionally.
pub async fn clear_cache(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.cache.clear();
    info!("cache cleared");
    (StatusCode::OK, Json(Envelope::message("cache cleared")))
}

/// One lightweight upstream probe; does not touch the cache.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if state.upstream.probe().await {
        (
            StatusCode::OK,
            Json(Envelope::ok(json!({"status": "healthy"}))),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Envelope::fail(
                "upstream unreachable",
                json!({"status": "unhealthy"}),
            )),
        )
    }
}
