//! Factory functions for generating mock snippet database models.

use chrono::{Duration, Utc};

use crate::model::SnippetModel;

/// Create a mock snippet database model for testing.
///
/// The snippet is created now and expires in seven days.
///
/// # Arguments
/// - `snippet_id` - The snippet's primary key
///
/// # Returns
/// - `SnippetModel` - A snippet model with test data
pub fn mock_snippet_model(snippet_id: i32) -> SnippetModel {
    let now = Utc::now().naive_utc();
    SnippetModel {
        id: snippet_id,
        title: "An old silent pond".to_string(),
        content: "An old silent pond...\nA frog jumps into the pond,\nsplash! Silence again."
            .to_string(),
        created_at: now,
        expires_at: now + Duration::days(7),
    }
}
