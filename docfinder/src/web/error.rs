use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

/// Message the page shows when the analysis service can't be reached.
pub(crate) const UPSTREAM_UNAVAILABLE: &str =
    "The analysis service is unavailable right now. Please try again later.";

#[derive(Debug, Error)]
pub(crate) enum ProxyError {
    #[error("Error talking to the analysis service {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Failures go back as JSON with an `error` field, which the page already knows how to show.
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        error!("{self}");
        let body = Json(serde_json::json!({ "error": UPSTREAM_UNAVAILABLE }));
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}
