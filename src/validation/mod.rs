//! Request validation pipeline.
//!
//! Decides whether a candidate request is safe and well-formed enough to
//! forward, without making any network call. Total from the caller's
//! perspective: every failure mode is a [`ValidationResult`], never a panic
//! or error propagation.

pub mod method;
pub mod types;
pub mod url;

pub use method::validate_http_method;
pub use types::{
    HttpMethod, ParsedUrl, RequestPayload, Status, UrlData, UrlDetails, ValidatedRequest,
    ValidationMeta, ValidationResult,
};
pub use url::{check_request_url, parse_url, quick_validate, validate_request_url, ValidatorConfig};

/// Validates the whole payload: method first, then the URL chain.
///
/// First violation wins; the returned failure names exactly one rule.
/// On success the caller gets a [`ValidatedRequest`] carrying the
/// sanitized URL and parsed method.
pub fn validate_payload(
    payload: &RequestPayload,
    config: &ValidatorConfig,
) -> Result<ValidatedRequest, ValidationResult> {
    let method = method::validate_http_method(payload.http_method.as_ref())?;
    let url_data = url::check_request_url(payload.request_url.as_ref(), config)?;

    Ok(ValidatedRequest {
        url: url_data.details.sanitized,
        method,
        body: payload.body.clone(),
        cookies: payload.cookies.clone(),
        authorization: payload.authorization.clone(),
    })
}

/// Payload-level contract returning the uniform [`ValidationResult`] shape.
pub fn validate(payload: &RequestPayload, config: &ValidatorConfig) -> ValidationResult {
    match validate_payload(payload, config) {
        Ok(_) => ValidationResult::ok("Payload is valid"),
        Err(result) => result,
    }
}
