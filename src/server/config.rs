//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

/// Address the server listens on when `LISTEN_ADDR` is not set.
pub static DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:4000";

/// Log filter used when `RUST_LOG` is not set. Debug events from this crate are shown, such as
/// a stale session user or a rejected CSRF token.
pub static DEFAULT_LOG_FILTER: &str = "info,snippetbox=debug";

/// Minimum length in bytes of the secret used to sign session cookies.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

/// Settings loaded once at startup.
pub struct Config {
    /// Socket address to bind, e.g. `0.0.0.0:4000`
    pub listen_addr: String,
    /// Database connection string
    pub database_url: String,
    /// Valkey/Redis URL backing the session store
    pub valkey_url: String,
    /// Secret used to sign session cookies
    pub session_secret: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration using `lookup` to resolve each variable.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - The session secret is shorter than
    ///   [`MIN_SESSION_SECRET_LEN`] bytes
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.into()));

        let session_secret = require("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::InvalidEnvValue {
                var: "SESSION_SECRET".to_string(),
                reason: format!(
                    "must be at least {} bytes, got {}",
                    MIN_SESSION_SECRET_LEN,
                    session_secret.len()
                ),
            });
        }

        Ok(Self {
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            database_url: require("DATABASE_URL")?,
            valkey_url: require("VALKEY_URL")?,
            session_secret,
        })
    }
}
