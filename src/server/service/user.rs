//! User service layer.
//!
//! Registration, credential checks and lookups for user accounts. Passwords are hashed with
//! Argon2 before they reach the repository and are never returned to callers.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::model::ModelError,
        service::UserStore,
        util::password::{hash_password, verify_password},
    },
};

/// Database-backed [`UserStore`].
#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection, cloned cheaply from the shared pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for UserService {
    /// Hashes the password and stores the user.
    ///
    /// # Returns
    /// - `Ok(())` - User created
    /// - `Err(ModelError::DuplicateEmail)` - The unique email constraint rejected the insert
    /// - `Err(ModelError::DbErr)` - Any other database failure
    /// - `Err(ModelError::PasswordHashError)` - Hashing the password failed
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<(), ModelError> {
        let hashed_password = hash_password(password.to_string()).await?;

        let user_repo = UserRepository::new(&self.db);
        match user_repo
            .create(name, email, &hashed_password, Utc::now().naive_utc())
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ModelError::DuplicateEmail),
                _ => Err(err.into()),
            },
        }
    }

    /// Looks up an active user by email and verifies the password against the stored hash.
    ///
    /// An unknown email and a wrong password are reported identically so the response does not
    /// reveal which addresses are registered.
    async fn authenticate(&self, email: &str, password: &str) -> Result<i32, ModelError> {
        let user_repo = UserRepository::new(&self.db);
        let Some(user) = user_repo.find_active_by_email(email).await? else {
            return Err(ModelError::InvalidCredentials);
        };

        if !verify_password(password.to_string(), user.hashed_password).await? {
            return Err(ModelError::InvalidCredentials);
        }

        Ok(user.id)
    }

    async fn get(&self, id: i32) -> Result<UserDto, ModelError> {
        let user_repo = UserRepository::new(&self.db);

        user_repo
            .get(id)
            .await?
            .map(UserDto::from)
            .ok_or(ModelError::NoRecord)
    }
}
