//! Test fixture modules for database record creation.
//!
//! - `snippet` - Snippet records, both live and already expired
//! - `user` - User records with Argon2-hashed passwords

pub mod snippet;
pub mod user;
