use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/healthz", get(health_check))
}

/// Liveness only; never touches the bunny so probes don't advance decay
async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
