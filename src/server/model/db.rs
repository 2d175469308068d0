//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures don't need to reach into the `entity` crate.

/// Type alias for the snippet database model.
///
/// # Fields (from `entity::snippet::Model`)
/// - `id` - Primary key
/// - `title` - Title, at most 100 characters
/// - `content` - Body text
/// - `created_at` - Timestamp when the snippet was posted
/// - `expires_at` - Timestamp after which the snippet is treated as absent
pub type SnippetModel = entity::snippet::Model;

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `email` - Login email address (unique)
/// - `hashed_password` - Argon2 PHC string
/// - `created_at` - Timestamp when the account was registered
/// - `active` - Whether the account may log in
pub type UserModel = entity::user::Model;
