use axum::{Json, Router, extract::State, routing::get};
use bunny_core::Status;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(get_status))
}

async fn get_status(State(state): State<AppState>) -> Json<Status> {
    let mut bunny = state.bunny.lock().await;
    Json(bunny.status())
}
