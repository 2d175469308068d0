//! Error types for the Snippetbox server application.
//!
//! This module provides the error handling system with specialized error types for different
//! domains (authentication, configuration, persistence, rendering). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error definitions.
//!
//! Responses never carry internal details: clients only see the canonical status text while the
//! underlying cause is logged server-side.

pub mod auth;
pub mod config;
pub mod model;
pub mod render;

use std::backtrace::Backtrace;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{
    auth::AuthError, config::ConfigError, model::ModelError, render::RenderError,
};

/// Main error type for the Snippetbox server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Client errors (malformed input) mapped to a 4xx status
/// - Not found (missing or expired resource, unknown route)
/// - Server errors (database, session, template, runtime faults)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (CSRF validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Model error, including the not-found, duplicate and invalid-credentials sentinels.
    #[error(transparent)]
    ModelError(#[from] ModelError),
    /// Template lookup or execution error.
    #[error(transparent)]
    RenderError(#[from] RenderError),
    /// The request itself was malformed.
    #[error("Client error: {0}")]
    ClientError(StatusCode),
    /// The requested resource or route does not exist.
    #[error("Resource not found")]
    NotFound,
    /// Internal error indicating a bug in Snippetbox's code.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 4xx - For client errors with the canonical status text as body
/// - 404 Not Found - For missing resources
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ModelError(err) => err.into_response(),
            Self::RenderError(err) => err.into_response(),
            Self::ClientError(status) => status_text(status),
            Self::NotFound => status_text(StatusCode::NOT_FOUND),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a response whose body is the canonical reason phrase of `status`.
pub fn status_text(status: StatusCode) -> Response {
    (status, status.canonical_reason().unwrap_or_default()).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error message and a stack trace are logged, the client only receives the generic
/// "Internal Server Error" text.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!(
            backtrace = %Backtrace::force_capture(),
            "{}",
            self.0
        );

        status_text(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
