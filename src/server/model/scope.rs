//! Per-request scope extractor.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::auth::{AuthenticatedUser, CsrfToken},
    },
};

/// Per-request context handed to handlers.
///
/// Collects what the middleware chain attached to the request: the session, the CSRF token and
/// the authenticated user, if any. Handlers read identity from here instead of looking it up
/// themselves.
#[derive(Clone)]
pub struct RequestScope {
    /// Session loaded by the session layer
    pub session: Session,
    /// Token issued by the CSRF middleware, embedded in rendered forms
    pub csrf_token: CsrfToken,
    /// User resolved by the authenticate middleware, `None` for anonymous requests
    pub authenticated_user: Option<UserDto>,
}

impl<S> FromRequestParts<S> for RequestScope
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().cloned().ok_or_else(|| {
            Error::InternalError(
                "Session missing from request extensions, the session layer is not applied to this route"
                    .to_string(),
            )
        })?;
        let csrf_token = parts
            .extensions
            .get::<CsrfToken>()
            .cloned()
            .ok_or(AuthError::CsrfNotInitialized)?;
        let authenticated_user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .map(|AuthenticatedUser(user)| user.clone());

        Ok(Self {
            session,
            csrf_token,
            authenticated_user,
        })
    }
}
