//! User table queries.

use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::UserModel;

/// Queries against the `users` table.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    ///
    /// Fails with a unique constraint violation if `email` is already registered.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        hashed_password: &str,
        now: NaiveDateTime,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            hashed_password: ActiveValue::Set(hashed_password.to_string()),
            created_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        };

        entity::prelude::User::insert(user)
            .exec_with_returning(self.db)
            .await
    }

    /// Gets a user by ID, active or not
    pub async fn get(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds an active user by email address
    pub async fn find_active_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::Active.eq(true))
            .one(self.db)
            .await
    }
}
