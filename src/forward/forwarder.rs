//! Forwarding of validated requests.
//!
//! Executes exactly one transport call per invocation, measures wall-clock
//! duration and response size, and folds success and failure into the
//! uniform [`ForwardResult`] envelope. Never returns an error to its
//! caller; unreachable targets and remote error statuses both surface as
//! the `failed` variant.

use super::transport::Transport;
use super::types::{ForwardMeta, ForwardResult, OutboundRequest, RequestEcho, ResponseEcho};
use crate::validation::ValidatedRequest;
use indexmap::IndexMap;
use serde_json::{json, Value};
use std::time::{Duration, Instant};

/// Forwards a validated request through the given transport.
pub async fn forward(request: ValidatedRequest, transport: &dyn Transport) -> ForwardResult {
    let outbound = OutboundRequest {
        url: request.url.clone(),
        method: request.method,
        headers: build_headers(&request),
        body: request.body.clone(),
    };

    let started = Instant::now();
    let outcome = transport.send(outbound).await;
    let elapsed_ms = round_millis(started.elapsed());

    let echo = RequestEcho {
        url: request.url,
        method: request.method,
        body: request.body.unwrap_or_else(|| Value::Object(Default::default())),
    };

    match outcome {
        Ok(response) => {
            tracing::debug!(
                status = response.status,
                elapsed_ms,
                "Forwarded request succeeded"
            );

            ForwardResult::Success {
                meta: ForwardMeta {
                    http_status: response.status,
                    time_milli_seconds: elapsed_ms,
                    size_bytes: body_size_bytes(&response.body),
                },
                request: echo,
                response: ResponseEcho {
                    headers: response.headers,
                    body: response.body,
                },
            }
        }
        Err(error) => {
            tracing::debug!(
                message = %error.message,
                carried_response = error.response.is_some(),
                elapsed_ms,
                "Forwarded request failed"
            );

            let (status, headers, body) = match error.response {
                Some(response) => {
                    let body = if response.body.is_null() {
                        json!({ "message": error.message })
                    } else {
                        response.body
                    };
                    (response.status, response.headers, body)
                }
                None => (500, IndexMap::new(), json!({ "message": error.message })),
            };

            ForwardResult::Failed {
                meta: ForwardMeta {
                    http_status: status,
                    time_milli_seconds: elapsed_ms,
                    size_bytes: body_size_bytes(&body),
                },
                request: echo,
                response: ResponseEcho { headers, body },
            }
        }
    }
}

fn build_headers(request: &ValidatedRequest) -> IndexMap<String, String> {
    let mut headers = IndexMap::new();

    if let Some(authorization) = &request.authorization {
        headers.insert("Authorization".to_string(), authorization.clone());
    }

    if let Some(cookies) = &request.cookies {
        let cookie = cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        headers.insert("Cookie".to_string(), cookie);
    }

    headers
}

/// Milliseconds with four decimal places, on both outcome paths.
fn round_millis(elapsed: Duration) -> f64 {
    let millis = elapsed.as_secs_f64() * 1000.0;
    (millis * 10_000.0).round() / 10_000.0
}

/// UTF-8 byte length of the body: as-is for strings, compact JSON for
/// anything else, zero when absent.
fn body_size_bytes(body: &Value) -> usize {
    match body {
        Value::Null => 0,
        Value::String(text) => text.len(),
        other => serde_json::to_string(other).map(|s| s.len()).unwrap_or(0),
    }
}
