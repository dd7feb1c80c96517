use crate::validation::HttpMethod;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Request handed to the transport, headers already assembled.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: IndexMap<String, String>,
    pub body: Option<Value>,
}

/// What the remote origin answered.
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: IndexMap<String, String>,
    pub body: Value,
}

/// Transport-level failure. Carries the remote response when the origin
/// answered with an error status; carries none for network-level failures
/// (DNS, connect, timeout).
#[derive(Debug, Clone)]
pub struct TransportError {
    pub message: String,
    pub response: Option<TransportResponse>,
}

/// Uniform envelope returned for every forward attempt.
///
/// Both variants share the same shape so callers always read the same
/// fields; the tag distinguishes "origin answered 2xx" from everything
/// else.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ForwardResult {
    Success {
        meta: ForwardMeta,
        request: RequestEcho,
        response: ResponseEcho,
    },
    Failed {
        meta: ForwardMeta,
        request: RequestEcho,
        response: ResponseEcho,
    },
}

impl ForwardResult {
    pub fn meta(&self) -> &ForwardMeta {
        match self {
            ForwardResult::Success { meta, .. } | ForwardResult::Failed { meta, .. } => meta,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ForwardResult::Success { .. })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardMeta {
    pub http_status: u16,
    pub time_milli_seconds: f64,
    pub size_bytes: usize,
}

/// Echo of what was actually sent.
#[derive(Debug, Serialize)]
pub struct RequestEcho {
    pub url: String,
    pub method: HttpMethod,
    pub body: Value,
}

#[derive(Debug, Serialize)]
pub struct ResponseEcho {
    pub headers: IndexMap<String, String>,
    pub body: Value,
}
