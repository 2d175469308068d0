//! Database-backed [`SnippetStore`](crate::server::service::SnippetStore).

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::snippet::SnippetDto,
    server::{
        data::snippet::SnippetRepository,
        error::model::ModelError,
        service::{SnippetStore, LATEST_SNIPPETS_LIMIT},
    },
};

/// Database-backed [`SnippetStore`].
#[derive(Clone)]
pub struct SnippetService {
    db: DatabaseConnection,
}

impl SnippetService {
    /// Creates a new instance of [`SnippetService`]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SnippetStore for SnippetService {
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_in_days: i64,
    ) -> Result<i32, ModelError> {
        let snippet_repo = SnippetRepository::new(&self.db);
        let snippet = snippet_repo
            .create(title, content, expires_in_days, Utc::now().naive_utc())
            .await?;

        Ok(snippet.id)
    }

    async fn get(&self, id: i32) -> Result<SnippetDto, ModelError> {
        let snippet_repo = SnippetRepository::new(&self.db);

        snippet_repo
            .get(id, Utc::now().naive_utc())
            .await?
            .map(SnippetDto::from)
            .ok_or(ModelError::NoRecord)
    }

    async fn latest(&self) -> Result<Vec<SnippetDto>, ModelError> {
        let snippet_repo = SnippetRepository::new(&self.db);
        let snippets = snippet_repo
            .latest(LATEST_SNIPPETS_LIMIT, Utc::now().naive_utc())
            .await?;

        Ok(snippets.into_iter().map(SnippetDto::from).collect())
    }
}
