//! Application pages registered in the [`TemplateCache`](crate::server::render::TemplateCache).

pub mod snippet;
pub mod user;

use crate::server::{error::render::RenderError, render::Page};

/// Error for a page that was handed a payload other than `expected`.
fn unexpected(template: &'static str, expected: &'static str, page: &Page) -> RenderError {
    RenderError::UnexpectedPayload {
        template,
        expected,
        found: page.kind(),
    }
}
