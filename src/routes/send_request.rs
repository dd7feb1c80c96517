use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::error::AppError;
use crate::forward::forward;
use crate::validation::{validate_payload, RequestPayload, ValidationResult};
use crate::AppState;

/// The proxy endpoint: validate the candidate request, forward it, and
/// relay the remote origin's status code alongside the envelope.
pub async fn send_request(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let Value::Object(_) = body else {
        let result = ValidationResult::fail("Request body must be an object");
        return Ok((StatusCode::BAD_REQUEST, Json(result)).into_response());
    };

    let payload: RequestPayload = match serde_json::from_value(body) {
        Ok(payload) => payload,
        Err(error) => {
            let result = ValidationResult::fail(format!("Invalid request body: {error}"));
            return Ok((StatusCode::BAD_REQUEST, Json(result)).into_response());
        }
    };

    let request = match validate_payload(&payload, &state.validator) {
        Ok(request) => request,
        Err(result) => {
            tracing::debug!(reason = %result.meta.message, "Rejected send-request payload");
            return Ok((StatusCode::BAD_REQUEST, Json(result)).into_response());
        }
    };

    tracing::debug!(url = %request.url, method = %request.method, "Forwarding request");
    let result = forward(request, state.transport.as_ref()).await;

    let status = StatusCode::from_u16(result.meta().http_status)
        .map_err(|_| AppError::BadUpstreamStatus(result.meta().http_status))?;

    Ok((status, Json(result)).into_response())
}
