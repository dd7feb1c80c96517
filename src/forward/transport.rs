//! Outbound HTTP transport.
//!
//! The forwarder talks to the network through the [`Transport`] trait so
//! tests can substitute a stub. The production implementation wraps a
//! shared `reqwest` client.

use super::types::{OutboundRequest, TransportError, TransportResponse};
use crate::validation::HttpMethod;
use indexmap::IndexMap;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// A single outbound HTTP call. One invocation, no retries; timeout and
/// connection management are the implementation's concern.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: OutboundRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + '_>>;
}

/// `reqwest`-backed transport.
///
/// Non-2xx answers from the origin are reported as a [`TransportError`]
/// carrying the response, so the forwarder maps them into the failure
/// envelope the same way it maps network-level failures.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: OutboundRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + '_>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(to_reqwest_method(request.method), &request.url);

            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            if let Some(body) = &request.body {
                builder = match body {
                    // String bodies go out verbatim; everything else as JSON.
                    Value::String(text) => builder.body(text.clone()),
                    other => builder.json(other),
                };
            }

            let response = builder.send().await.map_err(|error| TransportError {
                message: error.to_string(),
                response: None,
            })?;

            let status = response.status();
            let headers = collect_headers(response.headers());
            let bytes = response.bytes().await.map_err(|error| TransportError {
                message: format!("Failed to read response body: {error}"),
                response: None,
            })?;

            let transport_response = TransportResponse {
                status: status.as_u16(),
                headers,
                body: decode_body(&bytes),
            };

            if status.is_success() {
                Ok(transport_response)
            } else {
                Err(TransportError {
                    message: format!("Request failed with status code {}", status.as_u16()),
                    response: Some(transport_response),
                })
            }
        })
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Patch => reqwest::Method::PATCH,
    }
}

/// Flattens response headers into an ordered map; repeated headers
/// (notably `Set-Cookie`) are joined with `", "`.
fn collect_headers(headers: &reqwest::header::HeaderMap) -> IndexMap<String, String> {
    let mut collected: IndexMap<String, String> = IndexMap::new();

    for (name, value) in headers {
        let value = value.to_str().unwrap_or("");
        match collected.entry(name.as_str().to_string()) {
            indexmap::map::Entry::Occupied(mut entry) => {
                let joined = entry.get_mut();
                joined.push_str(", ");
                joined.push_str(value);
            }
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(value.to_string());
            }
        }
    }

    collected
}

/// Best-effort body decoding: JSON when it parses, UTF-8 text otherwise,
/// `null` for an empty body.
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }

    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(_) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
    }
}
