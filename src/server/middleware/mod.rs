//! Request interceptors applied around the route handlers.
//!
//! From the outside in, every dynamic request passes through:
//!
//! 1. [`headers::secure_headers`] sets browser hardening headers on every response
//! 2. [`recover::catch_panic_layer`] turns a panicking handler into a 500 response
//! 3. [`log::log_request`] records who asked for what
//! 4. request and body timeouts answer 408 once [`REQUEST_TIMEOUT`] or [`REQUEST_BODY_TIMEOUT`]
//!    runs out
//! 5. the session layer loads the signed session cookie
//! 6. [`csrf::csrf_protect`] enforces the double-submit token on state-changing requests
//! 7. [`auth::authenticate`] resolves the session's user ID into an [`AuthenticatedUser`]
//!
//! [`auth::require_authenticated_user`] is applied per route on top of that chain.
//!
//! [`AuthenticatedUser`]: crate::server::model::auth::AuthenticatedUser
//! [`REQUEST_TIMEOUT`]: crate::server::router::REQUEST_TIMEOUT
//! [`REQUEST_BODY_TIMEOUT`]: crate::server::router::REQUEST_BODY_TIMEOUT

pub mod auth;
pub mod csrf;
pub mod headers;
pub mod log;
pub mod recover;
