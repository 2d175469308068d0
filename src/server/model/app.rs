//! Shared application state.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    render::TemplateCache,
    service::{snippet::SnippetService, user::UserService, SnippetStore, UserStore},
};

/// Dependencies shared by every handler and middleware.
///
/// Stores are held behind their traits so tests can substitute failing or in-memory
/// implementations without a database.
#[derive(Clone)]
pub struct AppState {
    /// Snippet persistence
    pub snippets: Arc<dyn SnippetStore>,
    /// User persistence and credential checks
    pub users: Arc<dyn UserStore>,
    /// Pages available to [`render`](crate::server::render::render)
    pub templates: Arc<TemplateCache>,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            snippets: Arc::new(SnippetService::new(db.clone())),
            users: Arc::new(UserService::new(db)),
            templates: Arc::new(TemplateCache::new()),
        }
    }
}
