//! URL safety validation for the proxy endpoint.
//!
//! Implements a fixed-order chain of checks over a candidate target URL:
//! presence/length, protocol normalization, structural parse, protocol and
//! hostname policy (SSRF defense), port/path/query policy, and a final
//! sanitization pass that rebuilds a canonical URL. Each check either lets
//! the candidate continue or stops the chain with a single failure reason.
//!
//! The validator performs no I/O. Hostname checks are applied to the
//! literal host string only; a public-looking domain that resolves to a
//! private address is not detected here.

use super::types::{ParsedUrl, Status, UrlData, UrlDetails, ValidationResult};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use std::net::Ipv4Addr;
use url::Url;

const MAX_URL_LENGTH: usize = 2048;
const MAX_QUERY_LENGTH: usize = 1000;
const MAX_HOSTNAME_DOTS: usize = 5;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];
const BLOCKED_SCHEMES: [&str; 7] = ["file", "ftp", "mailto", "javascript", "data", "ws", "wss"];

const LOCALHOST_ALIASES: [&str; 4] = ["localhost", "127.0.0.1", "::1", "0.0.0.0"];

const RESTRICTED_TLDS: [&str; 7] = [
    ".local",
    ".internal",
    ".localhost",
    ".test",
    ".example",
    ".invalid",
    ".localhost.localdomain",
];

const RESTRICTED_PORTS: [u16; 6] = [0, 25, 137, 138, 139, 445];

const DANGEROUS_QUERY_PATTERNS: [&str; 5] =
    ["<script", "javascript:", "onload=", "onerror=", "onclick="];

/// Characters percent-encoded when the sanitized path is rebuilt.
/// Mirrors `encodeURI`: everything outside the unreserved and reserved
/// URI sets is escaped.
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'[')
    .add(b']')
    .add(b'%');

/// Settings threaded into the hostname checks.
///
/// `allow_localhost` is an explicit argument rather than ambient state so
/// the validator stays a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorConfig {
    pub allow_localhost: bool,
}

/// Validates `requestUrl` and returns the full [`ValidationResult`]
/// contract, with the sanitized URL details attached on success.
pub fn validate_request_url(raw: Option<&Value>, config: &ValidatorConfig) -> ValidationResult {
    match check_request_url(raw, config) {
        Ok(data) => ValidationResult::ok_with_data("requestUrl is valid", data),
        Err(result) => result,
    }
}

/// Runs the validation chain and hands back the URL detail block for
/// callers that need the sanitized form.
pub fn check_request_url(
    raw: Option<&Value>,
    config: &ValidatorConfig,
) -> Result<UrlData, ValidationResult> {
    let trimmed = basic_checks(raw)?;

    let (normalized, protocol_added) = normalize_url(&trimmed);

    let parsed = match Url::parse(&normalized) {
        Ok(parsed) => parsed,
        Err(error) => {
            tracing::debug!(url = %normalized, %error, "URL failed structural parse");
            return Err(ValidationResult::fail("Invalid URL format"));
        }
    };

    check_protocol(&parsed)?;

    let hostname = parsed.host_str().unwrap_or_default().to_string();
    check_hostname(&hostname, config.allow_localhost)?;
    check_port(parsed.port())?;

    // Traversal and injection checks must see the path and query as the
    // caller wrote them; the parser resolves `..` segments and
    // percent-encodes characters like `<` during parse.
    check_path(&raw_path_of(&normalized))?;
    check_query(raw_query_of(&normalized).as_deref())?;
    security_checks(&parsed, &hostname)?;

    let sanitized = sanitize_url(&parsed);
    tracing::debug!(url = %sanitized, "URL validation passed");

    Ok(UrlData {
        status: Status::Success,
        message: "URL is valid".to_string(),
        details: UrlDetails {
            original: trimmed,
            normalized,
            sanitized,
            protocol_added,
            hostname,
            port: parsed
                .port()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "default".to_string()),
            path: parsed.path().to_string(),
        },
    })
}

/// Loose check for callers that only need "parseable, http(s), has a host".
/// This is not the SSRF-hardened validator.
pub fn quick_validate(url: &str) -> bool {
    Url::parse(url)
        .map(|parsed| {
            ALLOWED_SCHEMES.contains(&parsed.scheme())
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        })
        .unwrap_or(false)
}

/// Decomposes a URL into its components for diagnostics.
pub fn parse_url(url: &str) -> Result<ParsedUrl, ValidationResult> {
    let parsed = Url::parse(url).map_err(|_| ValidationResult::fail("Invalid URL format"))?;

    Ok(ParsedUrl {
        protocol: format!("{}:", parsed.scheme()),
        hostname: parsed.host_str().unwrap_or_default().to_string(),
        port: parsed.port(),
        pathname: parsed.path().to_string(),
        search: parsed.query().map(str::to_string),
        hash: parsed.fragment().map(str::to_string),
        origin: parsed.origin().ascii_serialization(),
        full_url: parsed.as_str().to_string(),
    })
}

fn basic_checks(raw: Option<&Value>) -> Result<String, ValidationResult> {
    let value = match raw {
        None | Some(Value::Null) => {
            return Err(ValidationResult::fail("requestUrl is required"));
        }
        Some(value) => value,
    };

    let Value::String(url) = value else {
        return Err(ValidationResult::fail("requestUrl must be a string"));
    };

    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ValidationResult::fail("requestUrl cannot be empty"));
    }

    if trimmed.len() > MAX_URL_LENGTH {
        return Err(ValidationResult::fail(format!(
            "requestUrl exceeds maximum length of {MAX_URL_LENGTH} characters"
        )));
    }

    Ok(trimmed.to_string())
}

/// Prepends `https` to scheme-less input. Never fails; only rewrites.
///
/// A bare `scheme:` prefix (no slashes) is left alone when the scheme is a
/// known-blocked one, so `javascript:` and friends reach the protocol
/// check instead of being mangled into a hostname.
fn normalize_url(url: &str) -> (String, bool) {
    if has_scheme_prefix(url) {
        return (url.to_string(), false);
    }

    if url.starts_with("//") {
        (format!("https:{url}"), true)
    } else {
        (format!("https://{url}"), true)
    }
}

fn has_scheme_prefix(url: &str) -> bool {
    if let Some(idx) = url.find("://") {
        if is_scheme(&url[..idx]) {
            return true;
        }
    }

    url.split_once(':')
        .map(|(scheme, _)| BLOCKED_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn check_protocol(parsed: &Url) -> Result<(), ValidationResult> {
    let scheme = parsed.scheme();

    if BLOCKED_SCHEMES.contains(&scheme) {
        return Err(ValidationResult::fail(format!(
            "Protocol \"{scheme}:\" is not allowed"
        )));
    }

    if !ALLOWED_SCHEMES.contains(&scheme) {
        return Err(ValidationResult::fail(format!(
            "Protocol \"{scheme}:\" is not supported. Only HTTP and HTTPS are allowed."
        )));
    }

    Ok(())
}

fn check_hostname(hostname: &str, allow_localhost: bool) -> Result<(), ValidationResult> {
    if hostname.is_empty() {
        return Err(ValidationResult::fail("Hostname is required in the URL"));
    }

    let lower = hostname.to_ascii_lowercase();
    if RESTRICTED_TLDS.iter().any(|tld| lower.ends_with(tld)) {
        return Err(ValidationResult::fail(
            "URL contains restricted domain suffix",
        ));
    }

    // IPv6 literals carry brackets in the host string; the alias list does not.
    let unbracketed = lower.trim_start_matches('[').trim_end_matches(']');
    let is_alias = LOCALHOST_ALIASES.contains(&unbracketed);

    if allow_localhost {
        if is_alias {
            return Ok(());
        }
    } else {
        if is_alias {
            return Err(ValidationResult::fail(
                "Localhost URLs are not allowed in production",
            ));
        }

        if let Ok(ip) = unbracketed.parse::<Ipv4Addr>() {
            if ip.is_loopback() || ip.is_private() || ip.is_link_local() {
                return Err(ValidationResult::fail(
                    "Private/internal IP addresses are not allowed",
                ));
            }
        }
    }

    if !is_valid_hostname_format(hostname) {
        return Err(ValidationResult::fail("Invalid hostname format"));
    }

    Ok(())
}

fn check_port(port: Option<u16>) -> Result<(), ValidationResult> {
    // Absent port means the protocol default. Out-of-range values never
    // reach here; they already fail the structural parse.
    let Some(port) = port else {
        return Ok(());
    };

    if RESTRICTED_PORTS.contains(&port) {
        return Err(ValidationResult::fail(format!("Port {port} is restricted")));
    }

    Ok(())
}

fn check_path(path: &str) -> Result<(), ValidationResult> {
    if path.is_empty() || path == "/" {
        return Ok(());
    }

    let collapsed = collapse_slashes(path);
    if collapsed.contains("/../") || collapsed.ends_with("/..") {
        return Err(ValidationResult::fail("URL contains path traversal attempt"));
    }

    let decoded = percent_decode_str(path).decode_utf8_lossy();
    if has_dangerous_path_pattern(path) || has_dangerous_path_pattern(&decoded) {
        return Err(ValidationResult::fail(
            "URL path contains invalid or dangerous patterns",
        ));
    }

    Ok(())
}

fn has_dangerous_path_pattern(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();

    path.ends_with("..")
        || path.contains("/../")
        || path.ends_with("/.")
        || path.contains("/./")
        || path.contains(['<', '>', ':', '"', '|', '?', '*'])
        || lower.contains("%2e%2e")
        || lower.contains("%2e.")
}

fn check_query(query: Option<&str>) -> Result<(), ValidationResult> {
    let query = match query {
        None | Some("") => return Ok(()),
        Some(query) => query,
    };

    if query.len() > MAX_QUERY_LENGTH {
        return Err(ValidationResult::fail("Query string is too long"));
    }

    let lower = query.to_ascii_lowercase();
    if DANGEROUS_QUERY_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
    {
        return Err(ValidationResult::fail(
            "Query string contains potentially dangerous content",
        ));
    }

    Ok(())
}

fn security_checks(parsed: &Url, hostname: &str) -> Result<(), ValidationResult> {
    let href = parsed.as_str();

    if has_double_encoding(href) {
        return Err(ValidationResult::fail(
            "URL contains double-encoded characters",
        ));
    }

    let lower = href.to_ascii_lowercase();
    if href.contains('\0') || lower.contains("%00") {
        return Err(ValidationResult::fail("URL contains NULL bytes"));
    }

    // Excessive-subdomain heuristic.
    if hostname.matches('.').count() > MAX_HOSTNAME_DOTS {
        return Err(ValidationResult::fail("URL contains too many subdomains"));
    }

    Ok(())
}

/// Matches `%25` followed by two hex digits, i.e. a percent sign that was
/// itself percent-encoded.
fn has_double_encoding(href: &str) -> bool {
    let bytes = href.as_bytes();
    href.match_indices("%25").any(|(idx, _)| {
        bytes.get(idx + 3).is_some_and(u8::is_ascii_hexdigit)
            && bytes.get(idx + 4).is_some_and(u8::is_ascii_hexdigit)
    })
}

/// Rebuilds the canonical URL: lowercased host, explicit port if any, and
/// the path percent-decoded then re-encoded to normalize its escaping.
fn sanitize_url(parsed: &Url) -> String {
    let mut sanitized = format!("{}://", parsed.scheme());
    sanitized.push_str(&parsed.host_str().unwrap_or_default().to_ascii_lowercase());

    if let Some(port) = parsed.port() {
        sanitized.push(':');
        sanitized.push_str(&port.to_string());
    }

    let decoded = percent_decode_str(parsed.path()).decode_utf8_lossy();
    sanitized.push_str(&utf8_percent_encode(&decoded, PATH_ENCODE_SET).to_string());

    if let Some(query) = parsed.query() {
        sanitized.push('?');
        sanitized.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        sanitized.push('#');
        sanitized.push_str(fragment);
    }

    sanitized
}

/// Extracts the path portion of the normalized string before parsing,
/// preserving `..` segments and raw percent sequences.
fn raw_path_of(normalized: &str) -> String {
    let after_scheme = normalized
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(normalized);

    let end = after_scheme
        .find(['?', '#'])
        .unwrap_or(after_scheme.len());

    match after_scheme[..end].find('/') {
        Some(idx) => after_scheme[idx..end].to_string(),
        None => String::new(),
    }
}

/// Extracts the query portion of the normalized string before parsing,
/// without the leading `?`. A `?` inside the fragment is not a query.
fn raw_query_of(normalized: &str) -> Option<String> {
    let before_fragment = &normalized[..normalized.find('#').unwrap_or(normalized.len())];
    let start = before_fragment.find('?')? + 1;
    Some(before_fragment[start..].to_string())
}

fn collapse_slashes(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    let mut previous_was_slash = false;

    for c in path.chars() {
        if c == '/' {
            if previous_was_slash {
                continue;
            }
            previous_was_slash = true;
        } else {
            previous_was_slash = false;
        }
        collapsed.push(c);
    }

    collapsed
}

fn is_valid_hostname_format(hostname: &str) -> bool {
    if let Some(valid) = check_dotted_ipv4(hostname) {
        return valid;
    }

    if is_bracketed_ipv6(hostname) {
        return true;
    }

    is_valid_domain(hostname)
}

/// Returns `Some(valid)` when the host is shaped like dotted IPv4
/// (four numeric labels), `None` when it is not IPv4-shaped at all.
fn check_dotted_ipv4(hostname: &str) -> Option<bool> {
    let labels: Vec<&str> = hostname.split('.').collect();

    let ipv4_shaped = labels.len() == 4
        && labels
            .iter()
            .all(|label| (1..=3).contains(&label.len()) && label.bytes().all(|b| b.is_ascii_digit()));
    if !ipv4_shaped {
        return None;
    }

    Some(
        labels
            .iter()
            .all(|label| label.parse::<u16>().map(|octet| octet <= 255).unwrap_or(false)),
    )
}

fn is_bracketed_ipv6(hostname: &str) -> bool {
    let Some(inner) = hostname
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return false;
    };

    !inner.is_empty() && inner.chars().all(|c| c.is_ascii_hexdigit() || c == ':')
}

fn is_valid_domain(hostname: &str) -> bool {
    let labels: Vec<&str> = hostname.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };

    // Single-label names are not routable public domains.
    if rest.is_empty() {
        return false;
    }

    rest.iter().all(|label| is_valid_domain_label(label))
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_valid_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strict() -> ValidatorConfig {
        ValidatorConfig {
            allow_localhost: false,
        }
    }

    fn dev() -> ValidatorConfig {
        ValidatorConfig {
            allow_localhost: true,
        }
    }

    fn validate(url: &str, config: &ValidatorConfig) -> ValidationResult {
        validate_request_url(Some(&json!(url)), config)
    }

    fn failure_message(url: &str, config: &ValidatorConfig) -> String {
        let result = validate(url, config);
        assert!(!result.valid, "expected {url} to be rejected");
        result.meta.message
    }

    #[test]
    fn rejects_missing_and_mistyped_url() {
        let result = validate_request_url(None, &strict());
        assert_eq!(result.meta.message, "requestUrl is required");

        let result = validate_request_url(Some(&json!(17)), &strict());
        assert_eq!(result.meta.message, "requestUrl must be a string");

        let result = validate_request_url(Some(&json!("   ")), &strict());
        assert_eq!(result.meta.message, "requestUrl cannot be empty");
    }

    #[test]
    fn rejects_overlong_url_before_parsing() {
        let url = format!("https://example.com/{}", "a".repeat(3000));
        assert!(failure_message(&url, &strict()).contains("maximum length"));
    }

    #[test]
    fn normalizes_bare_and_protocol_relative_urls() {
        let result = validate("example.com/a", &strict());
        assert!(result.valid);
        let details = result.data.unwrap().details;
        assert_eq!(details.normalized, "https://example.com/a");
        assert!(details.protocol_added);

        let result = validate("//example.com", &strict());
        assert!(result.valid);
        let details = result.data.unwrap().details;
        assert_eq!(details.normalized, "https://example.com");
    }

    #[test]
    fn leaves_explicit_schemes_untouched() {
        let result = validate("http://example.com/a", &strict());
        assert!(result.valid);
        let details = result.data.unwrap().details;
        assert_eq!(details.normalized, "http://example.com/a");
        assert!(!details.protocol_added);
    }

    #[test]
    fn rejects_blocked_protocols() {
        assert!(failure_message("file:///etc/passwd", &strict()).contains("not allowed"));
        assert!(failure_message("javascript:alert(1)", &strict()).contains("not allowed"));
        assert!(failure_message("ftp://example.com/file", &strict()).contains("not allowed"));
        assert!(failure_message("wss://example.com/socket", &strict()).contains("not allowed"));
    }

    #[test]
    fn rejects_garbage_as_invalid_format() {
        assert_eq!(
            failure_message("https://exa mple.com", &strict()),
            "Invalid URL format"
        );
        assert_eq!(
            failure_message("http://example.com:70000", &strict()),
            "Invalid URL format"
        );
    }

    #[test]
    fn rejects_localhost_and_private_ranges_in_production() {
        for url in [
            "http://127.0.0.1/admin",
            "http://localhost:8080",
            "http://[::1]/",
            "http://0.0.0.0",
        ] {
            let message = failure_message(url, &strict());
            assert!(
                message.contains("Localhost") || message.contains("Private"),
                "{url}: {message}"
            );
        }

        for url in [
            "http://10.0.0.5/",
            "http://172.16.1.1/",
            "http://192.168.1.1",
            "http://169.254.169.254/latest/meta-data",
        ] {
            assert_eq!(
                failure_message(url, &strict()),
                "Private/internal IP addresses are not allowed",
                "{url}"
            );
        }
    }

    #[test]
    fn allows_localhost_and_private_ranges_in_development() {
        for url in [
            "http://127.0.0.1/admin",
            "http://localhost:8080",
            "http://192.168.1.1",
            "http://169.254.169.254/latest/meta-data",
        ] {
            assert!(validate(url, &dev()).valid, "{url}");
        }
    }

    #[test]
    fn rejects_restricted_domain_suffixes() {
        for url in [
            "https://printer.local/",
            "https://db.internal",
            "https://app.test",
            "https://foo.localhost",
        ] {
            assert_eq!(
                failure_message(url, &strict()),
                "URL contains restricted domain suffix",
                "{url}"
            );
        }
    }

    #[test]
    fn rejects_malformed_hostnames() {
        // Out-of-range octets already fail the WHATWG host parser.
        assert_eq!(
            failure_message("https://999.1.1.1/", &strict()),
            "Invalid URL format"
        );
        assert_eq!(
            failure_message("https://-bad-.com/", &strict()),
            "Invalid hostname format"
        );
        assert_eq!(
            failure_message("https://example.c0m/", &strict()),
            "Invalid hostname format"
        );
    }

    #[test]
    fn rejects_restricted_ports_and_accepts_others() {
        assert_eq!(
            failure_message("http://example.com:25", &strict()),
            "Port 25 is restricted"
        );
        assert_eq!(
            failure_message("http://example.com:445/share", &strict()),
            "Port 445 is restricted"
        );
        assert!(validate("http://example.com:8443", &strict()).valid);
    }

    #[test]
    fn rejects_path_traversal_raw_and_encoded() {
        assert_eq!(
            failure_message("http://example.com/a/../../etc/passwd", &strict()),
            "URL contains path traversal attempt"
        );
        assert_eq!(
            failure_message("http://example.com/%2e%2e/etc/passwd", &strict()),
            "URL path contains invalid or dangerous patterns"
        );
        assert_eq!(
            failure_message("http://example.com/a/..", &strict()),
            "URL contains path traversal attempt"
        );
        assert_eq!(
            failure_message("http://example.com/a/./b", &strict()),
            "URL path contains invalid or dangerous patterns"
        );
    }

    #[test]
    fn rejects_dangerous_path_characters() {
        assert_eq!(
            failure_message("http://example.com/a%7Cb%3Fc", &strict()),
            "URL path contains invalid or dangerous patterns"
        );
    }

    #[test]
    fn rejects_dangerous_query_content() {
        assert_eq!(
            failure_message("http://example.com/?q=<script>alert(1)</script>", &strict()),
            "Query string contains potentially dangerous content"
        );
        assert_eq!(
            failure_message("http://example.com/?cb=onerror=x", &strict()),
            "Query string contains potentially dangerous content"
        );

        let long_query = format!("http://example.com/?q={}", "x".repeat(1500));
        assert_eq!(
            failure_message(&long_query, &strict()),
            "Query string is too long"
        );
    }

    #[test]
    fn fragment_content_is_not_treated_as_query() {
        assert!(validate("https://example.com/#section?onload=x", &strict()).valid);
        assert!(validate("https://example.com/page#top?ref=1", &strict()).valid);

        let long_fragment = format!("https://example.com/#{}", "x".repeat(1500));
        assert!(validate(&long_fragment, &strict()).valid);

        // A real query ahead of the fragment is still checked.
        assert_eq!(
            failure_message("https://example.com/?cb=onload=x#frag", &strict()),
            "Query string contains potentially dangerous content"
        );
    }

    #[test]
    fn rejects_double_encoding_and_nul_bytes() {
        assert_eq!(
            failure_message("http://example.com/a%252fb", &strict()),
            "URL contains double-encoded characters"
        );
        assert_eq!(
            failure_message("http://example.com/a%00b", &strict()),
            "URL contains NULL bytes"
        );
    }

    #[test]
    fn rejects_excessive_subdomains() {
        assert_eq!(
            failure_message("http://a.b.c.d.e.f.example.com/", &strict()),
            "URL contains too many subdomains"
        );
    }

    #[test]
    fn sanitizes_successful_urls() {
        let result = validate("HTTP://Example.COM:8443/a%20b/c", &strict());
        assert!(result.valid);
        let details = result.data.unwrap().details;
        assert_eq!(details.sanitized, "http://example.com:8443/a%20b/c");
        assert_eq!(details.hostname, "example.com");
        assert_eq!(details.port, "8443");

        let result = validate("https://api.example.com", &strict());
        assert!(result.valid);
        let details = result.data.unwrap().details;
        assert_eq!(details.port, "default");
        assert_eq!(details.path, "/");
    }

    #[test]
    fn validation_is_idempotent() {
        let input = json!("http://example.com/a/../b");
        let first = validate_request_url(Some(&input), &strict());
        let second = validate_request_url(Some(&input), &strict());
        assert_eq!(first.valid, second.valid);
        assert_eq!(first.meta.message, second.meta.message);
    }

    #[test]
    fn quick_validate_checks_protocol_and_host_only() {
        assert!(quick_validate("https://example.com"));
        assert!(quick_validate("http://127.0.0.1:8080/admin"));
        assert!(!quick_validate("ftp://example.com"));
        assert!(!quick_validate("not a url"));
    }

    #[test]
    fn parse_url_decomposes_components() {
        let parsed = parse_url("https://example.com:8443/a?b=1#frag").unwrap();
        assert_eq!(parsed.protocol, "https:");
        assert_eq!(parsed.hostname, "example.com");
        assert_eq!(parsed.port, Some(8443));
        assert_eq!(parsed.pathname, "/a");
        assert_eq!(parsed.search.as_deref(), Some("b=1"));
        assert_eq!(parsed.hash.as_deref(), Some("frag"));
        assert_eq!(parsed.origin, "https://example.com:8443");

        assert!(parse_url("::nope::").is_err());
    }
}
