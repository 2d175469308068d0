//! Argon2 password hashing.
//!
//! Hashing is deliberately expensive, so both operations run on the blocking thread pool
//! rather than stalling the async executor.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::model::ModelError;

/// Hashes `password` with a freshly generated salt, returning the PHC string.
pub async fn hash_password(password: String) -> Result<String, ModelError> {
    let hashed = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await??;

    Ok(hashed)
}

/// Checks `password` against a stored PHC string.
///
/// A mismatch is `Ok(false)`. An unparseable stored hash is an error.
pub async fn verify_password(password: String, hashed_password: String) -> Result<bool, ModelError> {
    let matches = tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hashed_password)?;

        Ok::<_, argon2::password_hash::Error>(
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
        )
    })
    .await??;

    Ok(matches)
}
