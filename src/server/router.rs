//! HTTP routing and middleware composition.
//!
//! # Registered Endpoints
//! - `GET /` - Latest snippets
//! - `GET /snippet/{id}` - Snippet detail
//! - `GET /snippet/create` - New snippet form (authenticated)
//! - `POST /snippet/create` - Store a new snippet (authenticated)
//! - `GET /user/signup`, `POST /user/signup` - Registration
//! - `GET /user/login`, `POST /user/login` - Login
//! - `POST /user/logout` - Logout (authenticated)
//! - `GET /ping` - Liveness probe, outside of the session, CSRF and authentication layers
//!
//! Every other path answers 404.

use std::{convert::Infallible, time::Duration};

use axum::{
    extract::Request,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post, Route},
    Router,
};
use tower::{Layer, Service};
use tower_http::timeout::{RequestBodyTimeoutLayer, TimeoutLayer};

use crate::server::{
    controller,
    error::Error,
    middleware::{
        auth::{authenticate, require_authenticated_user},
        csrf::csrf_protect,
        headers::secure_headers,
        log::log_request,
        recover::catch_panic_layer,
    },
    model::app::AppState,
};

/// Longest a request may take from arrival to response before it is answered with 408.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest a client may take to deliver the request body.
pub const REQUEST_BODY_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the application router.
///
/// Generic over the session layer so production can use the Redis-backed store while tests use
/// an in-memory one.
///
/// # Middleware
/// From the outside in: security headers, panic recovery, request logging, timeouts, session,
/// CSRF, and authentication. The liveness probe only passes through the first four.
///
/// # Example
/// ```ignore
/// let session = startup::connect_to_session(&config).await?;
/// let app = router::routes(AppState::from(db), session);
/// ```
pub fn routes<L>(state: AppState, session_layer: L) -> Router
where
    L: Layer<Route> + Clone + Send + Sync + 'static,
    L::Service: Service<Request> + Clone + Send + Sync + 'static,
    <L::Service as Service<Request>>::Response: IntoResponse + 'static,
    <L::Service as Service<Request>>::Error: Into<Infallible> + 'static,
    <L::Service as Service<Request>>::Future: Send + 'static,
{
    let protected = Router::new()
        .route(
            "/snippet/create",
            get(controller::snippet::create_snippet_form).post(controller::snippet::create_snippet),
        )
        .route("/user/logout", post(controller::user::logout_user))
        .route_layer(middleware::from_fn(require_authenticated_user));

    let dynamic = Router::new()
        .route("/", get(controller::snippet::home))
        .route("/snippet/{id}", get(controller::snippet::show_snippet))
        .route(
            "/user/signup",
            get(controller::user::signup_user_form).post(controller::user::signup_user),
        )
        .route(
            "/user/login",
            get(controller::user::login_user_form).post(controller::user::login_user),
        )
        .merge(protected)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(middleware::from_fn(csrf_protect))
        .layer(session_layer);

    Router::new()
        .route("/ping", get(controller::health::ping))
        .merge(dynamic)
        .layer(RequestBodyTimeoutLayer::new(REQUEST_BODY_TIMEOUT))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(middleware::from_fn(log_request))
        .layer(catch_panic_layer())
        .layer(middleware::map_response(secure_headers))
        .with_state(state)
}

async fn not_found() -> Response {
    Error::NotFound.into_response()
}
