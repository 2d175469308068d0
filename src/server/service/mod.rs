//! Service layer for business logic.
//!
//! Handlers never talk to repositories directly. They depend on the narrow [`SnippetStore`] and
//! [`UserStore`] contracts defined here, which report the sentinel conditions of
//! [`ModelError`] (`NoRecord`, `DuplicateEmail`, `InvalidCredentials`) separately from opaque
//! failures. The database-backed implementations live in the submodules, tests substitute their
//! own.

pub mod snippet;
pub mod user;

use async_trait::async_trait;

use crate::{
    model::{snippet::SnippetDto, user::UserDto},
    server::error::model::ModelError,
};

/// Maximum number of snippets returned by [`SnippetStore::latest`].
pub const LATEST_SNIPPETS_LIMIT: u64 = 10;

/// Snippet persistence contract used by the snippet handlers.
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Stores a new snippet expiring `expires_in_days` from now and returns its ID.
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_in_days: i64,
    ) -> Result<i32, ModelError>;

    /// Fetches a snippet which has not yet expired.
    ///
    /// # Returns
    /// - `Err(ModelError::NoRecord)` - No snippet with `id` exists, or it has expired
    async fn get(&self, id: i32) -> Result<SnippetDto, ModelError>;

    /// Fetches the most recently created snippets which have not expired, newest first.
    async fn latest(&self) -> Result<Vec<SnippetDto>, ModelError>;
}

/// User persistence and credential checking contract used by the user handlers and the
/// authentication middleware.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Registers a new user, hashing `password` before it is stored.
    ///
    /// # Returns
    /// - `Err(ModelError::DuplicateEmail)` - `email` is already registered
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<(), ModelError>;

    /// Checks an email and password pair, returning the matching user's ID.
    ///
    /// # Returns
    /// - `Err(ModelError::InvalidCredentials)` - No active user has `email`, or the password
    ///   does not match
    async fn authenticate(&self, email: &str, password: &str) -> Result<i32, ModelError>;

    /// Fetches a user by ID.
    ///
    /// # Returns
    /// - `Err(ModelError::NoRecord)` - No user with `id` exists
    async fn get(&self, id: i32) -> Result<UserDto, ModelError>;
}
