//! Template rendering errors.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Template lookup and execution failures.
///
/// Both indicate a programming or deployment defect and are always served as a 500.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// No page is registered under the requested name
    #[error("The template {0} does not exist")]
    TemplateNotFound(String),
    /// The page was handed a [`Page`](crate::server::render::Page) variant it cannot display
    #[error("Template {template} expects {expected} page data, got {found}")]
    UnexpectedPayload {
        /// Name the page is registered under
        template: &'static str,
        /// Payload kind the page displays
        expected: &'static str,
        /// Payload kind it was given
        found: &'static str,
    },
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
