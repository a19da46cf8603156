mod care;
mod status;

use axum::{
    Json, Router,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(status::router())
        .merge(care::router())
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A care action the bunny can't perform
///
/// Answered with 200 and an `error` key rather than a 4xx; the page reads
/// the message out of the body.
#[derive(Debug)]
pub struct CareError(pub bunny_core::Error);

impl From<bunny_core::Error> for CareError {
    fn from(err: bunny_core::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for CareError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self.0, "Rejected care action");
        Json(ErrorResponse {
            error: self.0.to_string(),
        })
        .into_response()
    }
}
