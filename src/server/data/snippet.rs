//! Snippet table queries.

use chrono::{Duration, NaiveDateTime};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::db::SnippetModel;

/// Queries against the `snippets` table.
pub struct SnippetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SnippetRepository<'a, C> {
    /// Creates a new instance of [`SnippetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a snippet created at `now` which expires `expires_in_days` later
    pub async fn create(
        &self,
        title: &str,
        content: &str,
        expires_in_days: i64,
        now: NaiveDateTime,
    ) -> Result<SnippetModel, DbErr> {
        let snippet = entity::snippet::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            content: ActiveValue::Set(content.to_string()),
            created_at: ActiveValue::Set(now),
            expires_at: ActiveValue::Set(now + Duration::days(expires_in_days)),
            ..Default::default()
        };

        entity::prelude::Snippet::insert(snippet)
            .exec_with_returning(self.db)
            .await
    }

    /// Finds a snippet by ID, ignoring it if it expired before `now`
    pub async fn get(
        &self,
        snippet_id: i32,
        now: NaiveDateTime,
    ) -> Result<Option<SnippetModel>, DbErr> {
        entity::prelude::Snippet::find_by_id(snippet_id)
            .filter(entity::snippet::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Returns up to `limit` snippets which have not expired, newest first
    ///
    /// Snippets sharing a creation timestamp are ordered by descending ID so the result is stable.
    pub async fn latest(
        &self,
        limit: u64,
        now: NaiveDateTime,
    ) -> Result<Vec<SnippetModel>, DbErr> {
        entity::prelude::Snippet::find()
            .filter(entity::snippet::Column::ExpiresAt.gt(now))
            .order_by_desc(entity::snippet::Column::CreatedAt)
            .order_by_desc(entity::snippet::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
