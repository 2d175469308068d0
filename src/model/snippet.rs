use chrono::NaiveDateTime;

/// Snippet as exposed to handlers and templates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnippetDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

impl From<entity::snippet::Model> for SnippetDto {
    fn from(snippet: entity::snippet::Model) -> Self {
        Self {
            id: snippet.id,
            title: snippet.title,
            content: snippet.content,
            created_at: snippet.created_at,
            expires_at: snippet.expires_at,
        }
    }
}
