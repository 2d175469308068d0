//! Health endpoints.

/// Liveness probe
///
/// Served outside of the session, CSRF and authentication layers so it answers regardless of
/// session state or backing store health.
///
/// # Responses
/// - 200 (Success): Always, with the literal body `OK`
pub async fn ping() -> &'static str {
    "OK"
}
