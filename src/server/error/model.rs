//! Snippet and user store errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{status_text, InternalServerError};

/// Errors returned by the snippet and user stores.
///
/// `NoRecord`, `DuplicateEmail` and `InvalidCredentials` are sentinel conditions which handlers
/// match on to pick a targeted response; everything else is an opaque failure.
#[derive(Error, Debug)]
pub enum ModelError {
    /// No row matched, or the snippet has expired
    #[error("No matching record found")]
    NoRecord,
    /// Signup email collides with an existing user
    #[error("Email address is already in use")]
    DuplicateEmail,
    /// Unknown email, wrong password or inactive account
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// Database query failed
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Argon2 could not hash or parse a password hash
    #[error("Failed to hash or verify password: {0}")]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// Blocking hash task panicked or was cancelled
    #[error("Password hashing task did not complete: {0}")]
    HashTaskError(#[from] tokio::task::JoinError),
}

impl IntoResponse for ModelError {
    fn into_response(self) -> Response {
        match self {
            Self::NoRecord => status_text(StatusCode::NOT_FOUND),
            err => InternalServerError(err).into_response(),
        }
    }
}
