//! Startup configuration errors.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Problems with the environment the server was started in.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set to an unusable value
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
