//! Standard fixture values shared across tests.
//!
//! These are not real credentials, only placeholder values that let tests log in as a known
//! user without repeating literals everywhere.

/// Display name of the default test user.
pub static TEST_USER_NAME: &str = "Alice Jones";

/// Email address of the default test user.
pub static TEST_USER_EMAIL: &str = "alice@example.com";

/// Plain text password of the default test user.
///
/// Stored hashed with Argon2 by the user fixtures, so it can be used to authenticate against
/// the real user service.
pub static TEST_USER_PASSWORD: &str = "pa$$word";
