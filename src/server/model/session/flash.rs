//! One-shot flash message stored in the session.

use tower_sessions::Session;

use crate::server::error::Error;

/// Session key of the pending flash message.
pub const SESSION_FLASH_KEY: &str = "snippetbox:flash";

/// One-time message shown on the next rendered page.
pub struct SessionFlash;

impl SessionFlash {
    /// Store a message, replacing any flash not yet shown
    pub async fn insert(session: &Session, message: &str) -> Result<(), Error> {
        session.insert(SESSION_FLASH_KEY, message).await?;

        Ok(())
    }

    /// Take the message out of the session so it is only shown once
    pub async fn pop(session: &Session) -> Result<Option<String>, Error> {
        Ok(session.remove::<String>(SESSION_FLASH_KEY).await?)
    }
}
