use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::SnippetModel, TestContext};

impl TestContext {
    pub fn snippet<'a>(&'a self) -> SnippetFixtures<'a> {
        SnippetFixtures { setup: self }
    }
}

pub struct SnippetFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SnippetFixtures<'a> {
    /// Insert a snippet created now and expiring `expires_in_days` from now.
    pub async fn insert_snippet(
        &self,
        title: &str,
        content: &str,
        expires_in_days: i64,
    ) -> Result<SnippetModel, TestError> {
        let now = Utc::now().naive_utc();

        self.insert(title, content, now, now + Duration::days(expires_in_days))
            .await
    }

    /// Insert a snippet which was created two days ago and expired yesterday.
    ///
    /// The row exists in the database but must be treated as absent by every query.
    pub async fn insert_expired_snippet(
        &self,
        title: &str,
        content: &str,
    ) -> Result<SnippetModel, TestError> {
        let now = Utc::now().naive_utc();

        self.insert(
            title,
            content,
            now - Duration::days(2),
            now - Duration::days(1),
        )
        .await
    }

    async fn insert(
        &self,
        title: &str,
        content: &str,
        created_at: chrono::NaiveDateTime,
        expires_at: chrono::NaiveDateTime,
    ) -> Result<SnippetModel, TestError> {
        Ok(
            entity::prelude::Snippet::insert(entity::snippet::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                content: ActiveValue::Set(content.to_string()),
                created_at: ActiveValue::Set(created_at),
                expires_at: ActiveValue::Set(expires_at),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
