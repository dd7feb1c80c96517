//! HTTP-method sub-validator.

use super::types::{HttpMethod, ValidationResult};
use serde_json::Value;

/// Checks presence, type and value of the `httpMethod` field.
///
/// Returns the parsed method on success, or a failed [`ValidationResult`]
/// naming the violated rule.
pub fn validate_http_method(raw: Option<&Value>) -> Result<HttpMethod, ValidationResult> {
    let value = match raw {
        None | Some(Value::Null) => {
            return Err(ValidationResult::fail("httpMethod is required"));
        }
        Some(value) => value,
    };

    let Value::String(method) = value else {
        return Err(ValidationResult::fail("httpMethod must be a string"));
    };

    if method.trim().is_empty() {
        return Err(ValidationResult::fail("httpMethod cannot be empty"));
    }

    HttpMethod::parse(method).ok_or_else(|| {
        let allowed = HttpMethod::ALLOWED
            .iter()
            .map(HttpMethod::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        ValidationResult::fail(format!("httpMethod must be one of: {allowed}"))
    })
}
