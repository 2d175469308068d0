//! Logged in user ID stored in the session.

use tower_sessions::Session;

use crate::server::error::Error;

/// Session key of the logged in user's ID.
pub const SESSION_USER_ID_KEY: &str = "snippetbox:user:id";

/// ID of the logged in user.
///
/// Present only between a successful login and the following logout or session expiry.
pub struct SessionUserId;

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session.insert(SESSION_USER_ID_KEY, user_id).await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session.get::<i32>(SESSION_USER_ID_KEY).await?)
    }

    /// Remove user ID from session, logging the user out
    pub async fn remove(session: &Session) -> Result<(), Error> {
        session.remove::<i32>(SESSION_USER_ID_KEY).await?;

        Ok(())
    }
}
