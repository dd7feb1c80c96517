use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Incoming proxy request from the caller.
///
/// `requestUrl` and `httpMethod` are kept as raw JSON values so that a
/// missing or wrongly-typed field surfaces as a normal validation failure
/// instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    #[serde(default)]
    pub request_url: Option<Value>,
    #[serde(default)]
    pub http_method: Option<Value>,
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub cookies: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub authorization: Option<String>,
}

/// HTTP methods the proxy is willing to forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub const ALLOWED: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    /// Parses a method name case-insensitively, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            "PATCH" => Some(HttpMethod::Patch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Success,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationMeta {
    pub status: Status,
    pub message: String,
}

/// Outcome of a validation stage or of the overall validator.
///
/// `valid == false` always carries a message naming the single rule that
/// was violated; stages never accumulate errors.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub meta: ValidationMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<UrlData>,
}

impl ValidationResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            meta: ValidationMeta {
                status: Status::Success,
                message: message.into(),
            },
            data: None,
        }
    }

    pub fn ok_with_data(message: impl Into<String>, data: UrlData) -> Self {
        Self {
            data: Some(data),
            ..Self::ok(message)
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            meta: ValidationMeta {
                status: Status::Failed,
                message: message.into(),
            },
            data: None,
        }
    }
}

/// Detail block attached to a successful URL validation.
#[derive(Debug, Clone, Serialize)]
pub struct UrlData {
    pub status: Status,
    pub message: String,
    pub details: UrlDetails,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlDetails {
    pub original: String,
    pub normalized: String,
    /// Canonical rebuilt form: lowercased host, re-encoded path.
    pub sanitized: String,
    pub protocol_added: bool,
    pub hostname: String,
    /// Explicit port, or `"default"` when the protocol default applies.
    pub port: String,
    pub path: String,
}

/// Decomposed URL, exported for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedUrl {
    pub protocol: String,
    pub hostname: String,
    pub port: Option<u16>,
    pub pathname: String,
    pub search: Option<String>,
    pub hash: Option<String>,
    pub origin: String,
    pub full_url: String,
}

/// A payload that has passed every validation stage and is safe to forward.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    /// Sanitized target URL.
    pub url: String,
    pub method: HttpMethod,
    pub body: Option<Value>,
    pub cookies: Option<IndexMap<String, String>>,
    pub authorization: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_methods_case_insensitively() {
        assert_eq!(HttpMethod::parse("get"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::parse(" DeLeTe "), Some(HttpMethod::Delete));
        assert_eq!(HttpMethod::parse("TRACE"), None);
    }

    #[test]
    fn failed_result_serializes_with_exact_field_names() {
        let result = ValidationResult::fail("requestUrl is required");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["meta"]["status"], "Failed");
        assert_eq!(json["meta"]["message"], "requestUrl is required");
        assert!(json.get("data").is_none());
    }
}
