//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main snippetbox crate to keep fixture signatures readable.

/// Type alias for snippet database model.
pub type SnippetModel = entity::snippet::Model;

/// Type alias for user database model.
pub type UserModel = entity::user::Model;
