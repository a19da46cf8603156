use axum::{Json, Router, extract::State, routing::post};
use bunny_core::{Action, Status};

use super::CareError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/feed", post(feed))
        .route("/play", post(play))
        .route("/clean", post(clean))
        .route("/reset", post(reset))
}

async fn feed(
    State(state): State<AppState>,
    Json(action): Json<Action>,
) -> Result<Json<Status>, CareError> {
    let mut bunny = state.bunny.lock().await;
    let status = bunny.apply_feed(action.kind)?;
    tracing::debug!(kind = ?action.kind, "Fed bunny");
    Ok(Json(status))
}

async fn play(
    State(state): State<AppState>,
    Json(action): Json<Action>,
) -> Result<Json<Status>, CareError> {
    let mut bunny = state.bunny.lock().await;
    let status = bunny.apply_play(action.kind)?;
    tracing::debug!(kind = ?action.kind, "Played with bunny");
    Ok(Json(status))
}

async fn clean(State(state): State<AppState>) -> Json<Status> {
    let mut bunny = state.bunny.lock().await;
    Json(bunny.clean())
}

async fn reset(State(state): State<AppState>) -> Json<Status> {
    let mut bunny = state.bunny.lock().await;
    let status = bunny.reset();
    tracing::info!("Bunny reset to initial stats");
    Json(status)
}
