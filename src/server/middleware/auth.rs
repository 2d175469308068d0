//! Session-backed authentication.
//!
//! [`authenticate`] runs on every dynamic request and turns the user ID stored in the session
//! into an [`AuthenticatedUser`] extension. [`require_authenticated_user`] is layered only on
//! the routes that need a logged in user.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::server::{
    error::{model::ModelError, Error},
    model::{app::AppState, auth::AuthenticatedUser, session::user::SessionUserId},
};

/// Path anonymous users are sent to when they hit a protected route.
pub const LOGIN_PATH: &str = "/user/login";

/// Resolves the session's user ID into an [`AuthenticatedUser`] request extension.
///
/// Requests without a user ID continue anonymously. A user ID pointing at a user which no longer
/// exists is removed from the session and the request continues anonymously.
///
/// # Returns
/// - `Ok(Response)` - Downstream response
/// - `Err(Error)` - Session could not be read, or the user lookup failed for a reason other than
///   the user not existing
pub async fn authenticate(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, Error> {
    let Some(user_id) = SessionUserId::get(&session).await? else {
        return Ok(next.run(request).await);
    };

    match state.users.get(user_id).await {
        Ok(user) => {
            request.extensions_mut().insert(AuthenticatedUser(user));
        }
        Err(ModelError::NoRecord) => {
            tracing::debug!(
                "Session references user ID {} which no longer exists, continuing anonymously",
                user_id
            );
            SessionUserId::remove(&session).await?;
        }
        Err(err) => return Err(err.into()),
    }

    Ok(next.run(request).await)
}

/// Redirects anonymous requests to the login page.
///
/// Must run inside [`authenticate`].
pub async fn require_authenticated_user(request: Request, next: Next) -> Response {
    if request.extensions().get::<AuthenticatedUser>().is_none() {
        return (StatusCode::FOUND, [(header::LOCATION, LOGIN_PATH)]).into_response();
    }

    next.run(request).await
}
