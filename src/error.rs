use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Fixed message returned for any unexpected internal failure. The real
/// cause is logged server-side and never exposed to the caller.
pub const INTERNAL_ERROR_MESSAGE: &str = "Error occurred in the server. Please try again later";

/// Errors that escape the validation/forwarding pipeline itself.
///
/// The validator and forwarder are total functions; anything surfacing here
/// is a defect in the hosting layer and maps to a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upstream produced unusable status code {0}")]
    BadUpstreamStatus(u16),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(detail = %self, "Internal error");

        let body = Json(json!({
            "status": "Failed",
            "message": INTERNAL_ERROR_MESSAGE,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
