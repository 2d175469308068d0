//! Connections to the backing services, established once before the server starts.

use sea_orm::DatabaseConnection;
use tower_sessions::{service::SignedCookie, SessionManagerLayer};
use tower_sessions_redis_store::{fred::prelude::Pool, RedisStore};

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
};

/// Session layer type used in production.
pub type SessionLayer = SessionManagerLayer<RedisStore<Pool>, SignedCookie>;

/// Idle lifetime after which a session is treated as absent.
pub const SESSION_INACTIVITY_HOURS: i64 = 12;

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure signed cookie session management
pub async fn connect_to_session(config: &Config) -> Result<SessionLayer, Error> {
    use time::Duration;
    use tower_sessions::{
        cookie::{Key, SameSite},
        Expiry,
    };
    use tower_sessions_redis_store::fred::prelude::{ClientLike, Config as RedisConfig};

    let key = Key::try_from(config.session_secret.as_bytes()).map_err(|e| {
        ConfigError::InvalidEnvValue {
            var: "SESSION_SECRET".to_string(),
            reason: e.to_string(),
        }
    })?;

    let redis_config = RedisConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(true)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::hours(
            SESSION_INACTIVITY_HOURS,
        )))
        .with_signed(key);

    Ok(session)
}
