//! CSRF and request-scope errors raised by the middleware chain.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{status_text, InternalServerError};

/// Rejections raised by the CSRF middleware and the request scope extractor.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unsafe request arrived without a CSRF cookie, served as 400
    #[error("State-changing request rejected: no CSRF cookie was presented")]
    CsrfMissingCookie,
    /// Submitted token absent or different from the cookie, served as 400
    #[error("State-changing request rejected: CSRF token missing or does not match the cookie")]
    CsrfValidationFailed,
    /// Handler asked for a CSRF token on a route without the CSRF layer, served as 500
    #[error("CSRF token missing from request extensions, the CSRF middleware is not applied to this route")]
    CsrfNotInitialized,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::CsrfMissingCookie | Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                status_text(StatusCode::BAD_REQUEST)
            }
            Self::CsrfNotInitialized => InternalServerError(self).into_response(),
        }
    }
}
