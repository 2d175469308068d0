//! Double-submit cookie CSRF protection.
//!
//! Every response to a request without a valid token cookie issues a fresh random token in the
//! `csrf_token` cookie. Pages echo the token back in a hidden form field. A state-changing
//! request is only let through when the token it submits, either in the `X-CSRF-Token` header or
//! the `csrf_token` form field, matches the cookie. Cross-origin pages can make the browser send
//! the cookie but cannot read it, so they cannot forge the matching field.

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use time::Duration;
use tower_sessions::cookie::{Cookie, SameSite};

use crate::server::{
    error::{auth::AuthError, Error},
    model::auth::CsrfToken,
};

/// Cookie carrying the token issued to the browser.
pub const CSRF_COOKIE_NAME: &str = "csrf_token";

/// Hidden form field pages submit the token in.
pub const CSRF_FORM_FIELD: &str = "csrf_token";

/// Header scripted clients may submit the token in instead of the form field.
pub const CSRF_HEADER_NAME: &str = "x-csrf-token";

const CSRF_TOKEN_BYTES: usize = 32;
const CSRF_COOKIE_MAX_AGE_DAYS: i64 = 365;

/// Upper bound on a form body buffered to look for the token.
const MAX_FORM_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Rejects state-changing requests without a matching CSRF token.
///
/// The token in effect for the request is inserted as a [`CsrfToken`] extension so pages can
/// embed it.
///
/// # Returns
/// - `Ok(Response)` - Safe method, or the submitted token matches the cookie
/// - `Err(Error::AuthError)` - 400 Bad Request, cookie absent or submitted token missing or wrong
/// - `Err(Error::ClientError)` - 400 Bad Request, the form body could not be read
pub async fn csrf_protect(request: Request, next: Next) -> Result<Response, Error> {
    let cookie_token = cookie_token(request.headers());

    let mut request = if is_safe_method(request.method()) {
        request
    } else {
        let Some(expected) = cookie_token.as_deref() else {
            return Err(AuthError::CsrfMissingCookie.into());
        };

        let (submitted, request) = submitted_token(request).await?;
        match submitted {
            Some(submitted) if tokens_match(expected, &submitted) => request,
            _ => return Err(AuthError::CsrfValidationFailed.into()),
        }
    };

    let (token, issued) = match cookie_token {
        Some(token) => (token, false),
        None => (generate_token(), true),
    };

    request.extensions_mut().insert(CsrfToken(token.clone()));
    let mut response = next.run(request).await;

    if issued {
        let cookie = token_cookie(token);
        let value = HeaderValue::from_str(&cookie.to_string()).map_err(|e| {
            Error::InternalError(format!("Failed to encode CSRF cookie header: {}", e))
        })?;
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    Ok(response)
}

fn is_safe_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

/// Returns the token from the request's `csrf_token` cookie if it is well formed.
fn cookie_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value.to_string()))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == CSRF_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| decode_token(token).is_some())
}

/// Finds the token submitted with the request.
///
/// Form bodies are buffered so the field can be read, the request is rebuilt with the same bytes
/// for the handler.
async fn submitted_token(request: Request) -> Result<(Option<String>, Request), Error> {
    if let Some(token) = request
        .headers()
        .get(CSRF_HEADER_NAME)
        .and_then(|value| value.to_str().ok())
    {
        let token = token.to_string();
        return Ok((Some(token), request));
    }

    let is_form = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));
    if !is_form {
        return Ok((None, request));
    }

    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_FORM_BODY_BYTES)
        .await
        .map_err(|_| Error::ClientError(StatusCode::BAD_REQUEST))?;

    let token = serde_urlencoded::from_bytes::<Vec<(String, String)>>(&bytes)
        .ok()
        .and_then(|pairs| {
            pairs
                .into_iter()
                .find(|(key, _)| key == CSRF_FORM_FIELD)
                .map(|(_, value)| value)
        });

    Ok((token, Request::from_parts(parts, Body::from(bytes))))
}

fn generate_token() -> String {
    let mut bytes = [0u8; CSRF_TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);

    URL_SAFE_NO_PAD.encode(bytes)
}

fn decode_token(token: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(token)
        .ok()
        .filter(|bytes| bytes.len() == CSRF_TOKEN_BYTES)
}

/// Compares two tokens without short-circuiting on the first differing byte.
fn tokens_match(expected: &str, submitted: &str) -> bool {
    let (Some(expected), Some(submitted)) = (decode_token(expected), decode_token(submitted))
    else {
        return false;
    };

    expected
        .iter()
        .zip(submitted.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

fn token_cookie(token: String) -> Cookie<'static> {
    Cookie::build((CSRF_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(CSRF_COOKIE_MAX_AGE_DAYS))
        .build()
}
