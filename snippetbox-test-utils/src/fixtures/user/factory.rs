//! Factory functions for generating mock user database models.
//!
//! Provides pure functions for creating user models with standard test values. These are
//! in-memory model instances that don't require database interaction, suitable for unit tests.

use chrono::Utc;

use crate::{
    constant::{TEST_USER_EMAIL, TEST_USER_NAME},
    model::UserModel,
};

/// Create a mock user database model for testing.
///
/// The password hash is a placeholder and will not verify against any password.
///
/// # Arguments
/// - `user_id` - The user's primary key
///
/// # Returns
/// - `UserModel` - A user model with test data
pub fn mock_user_model(user_id: i32) -> UserModel {
    UserModel {
        id: user_id,
        name: TEST_USER_NAME.to_string(),
        email: TEST_USER_EMAIL.to_string(),
        hashed_password: "not-a-real-hash".to_string(),
        created_at: Utc::now().naive_utc(),
        active: true,
    }
}
