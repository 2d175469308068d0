//! Shared helpers for integration tests.

pub mod client;

use axum::Router;
use snippetbox::server::{model::app::AppState, router};
use snippetbox_test_utils::TestContext;
use tower_sessions::{MemoryStore, SessionManagerLayer};

/// Extension trait for TestContext to build the application under test
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
    fn into_app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn into_app(&self) -> Router {
        test_app(self.into_app_state())
    }
}

/// Builds the full router with an in-memory session store in place of Redis
pub fn test_app(state: AppState) -> Router {
    router::routes(
        state,
        SessionManagerLayer::new(MemoryStore::default()).with_secure(false),
    )
}
