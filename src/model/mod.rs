//! Data transfer objects shared between the service layer, handlers and templates.

pub mod snippet;
pub mod user;
