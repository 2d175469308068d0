//! Browser hardening headers added to every response.

use axum::{
    http::{HeaderName, HeaderValue},
    response::Response,
};

/// Response headers asking browsers to block reflected XSS and refuse framing.
pub const SECURITY_HEADERS: [(&str, &str); 2] =
    [("x-xss-protection", "1; mode=block"), ("x-frame-options", "deny")];

/// Adds [`SECURITY_HEADERS`] to a response.
///
/// Applied with `axum::middleware::map_response` so it also covers responses produced by the
/// panic handler and by the router fallback.
pub async fn secure_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    response
}
