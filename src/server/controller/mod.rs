//! HTTP controller endpoints for Snippetbox.
//!
//! Handlers read their input through extractors, validate it with
//! [`Form`](crate::server::form::Form), call the stores held in
//! [`AppState`](crate::server::model::app::AppState), and either render a page or redirect.
//! Validation failures are not errors: the originating form is rendered again with its messages.

pub mod health;
pub mod snippet;
pub mod user;
pub mod util;
