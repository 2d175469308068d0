use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user whose password is hashed the same way the user service hashes it.
    pub async fn insert_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserModel, TestError> {
        self.insert(name, email, password, true).await
    }

    /// Insert a user flagged as inactive, who must not be able to authenticate.
    pub async fn insert_inactive_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserModel, TestError> {
        self.insert(name, email, password, false).await
    }

    async fn insert(
        &self,
        name: &str,
        email: &str,
        password: &str,
        active: bool,
    ) -> Result<UserModel, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let hashed_password = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                email: ActiveValue::Set(email.to_string()),
                hashed_password: ActiveValue::Set(hashed_password),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                active: ActiveValue::Set(active),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
