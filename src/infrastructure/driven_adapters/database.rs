//! Database Connection Management
//!
//! Opens, tunes and pings sqlx pools for PostgreSQL and SQLite.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::pool::PoolOptions;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgSslMode};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{Connection, Database, Postgres, Sqlite};

use crate::domain::gateways::DatabaseConnector;
use crate::domain::models::{DatabaseHandle, PoolSettings, PostgresSettings, SqliteSettings};
use crate::shared::errors::BootstrapError;

/// Permission bits for a freshly created SQLite data directory
#[cfg(unix)]
const DATA_DIR_MODE: u32 = 0o751;

/// sqlx-backed implementation of DatabaseConnector
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlxConnector;

impl SqlxConnector {
    /// Create a new SqlxConnector
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DatabaseConnector for SqlxConnector {
    async fn open_postgres(
        &self,
        settings: &PostgresSettings,
        pool: &PoolSettings,
    ) -> Result<DatabaseHandle, BootstrapError> {
        tracing::debug!(dsn = %settings.redacted_dsn(), "Opening PostgreSQL pool");

        let options = postgres_options(settings).map_err(BootstrapError::OpenPostgres)?;

        // Check liveness on a standalone connection: the pool would retry refused
        // connections until its acquire timeout and hide the cause.
        check_postgres_liveness(&options, pool.connect_timeout)
            .await
            .map_err(BootstrapError::PingPostgres)?;

        let pg_pool = pool_options::<Postgres>(pool).connect_lazy_with(options);

        tracing::info!(host = %settings.host, port = %settings.port, "PostgreSQL reachable");
        Ok(DatabaseHandle::Postgres(pg_pool))
    }

    async fn open_sqlite(
        &self,
        settings: &SqliteSettings,
        pool: &PoolSettings,
    ) -> Result<DatabaseHandle, BootstrapError> {
        create_data_dir(&settings.path)
            .await
            .map_err(BootstrapError::CreateDirectory)?;

        let file = settings.database_file();
        tracing::debug!(
            file = %file.display(),
            options = %SqliteSettings::driver_options(),
            "Opening SQLite pool"
        );

        let journal_mode = SqliteJournalMode::from_str(SqliteSettings::JOURNAL_MODE)
            .map_err(BootstrapError::OpenSqlite)?;
        let options = SqliteConnectOptions::new()
            .filename(&file)
            .create_if_missing(true)
            .foreign_keys(SqliteSettings::FOREIGN_KEYS)
            .busy_timeout(SqliteSettings::BUSY_TIMEOUT)
            .journal_mode(journal_mode);
        let sqlite_pool = pool_options::<Sqlite>(pool).connect_lazy_with(options);

        // The file is only opened once the first connection is established.
        let mut conn = sqlite_pool
            .acquire()
            .await
            .map_err(BootstrapError::OpenSqlite)?;
        conn.ping().await.map_err(BootstrapError::PingSqlite)?;
        drop(conn);

        tracing::info!(file = %file.display(), "SQLite database ready");
        Ok(DatabaseHandle::Sqlite(sqlite_pool))
    }
}

/// Build PostgreSQL connect options with TLS disabled
fn postgres_options(settings: &PostgresSettings) -> Result<PgConnectOptions, sqlx::Error> {
    let port: u16 = settings
        .port
        .parse()
        .map_err(|e| sqlx::Error::Configuration(format!("invalid port {:?}: {e}", settings.port).into()))?;

    Ok(PgConnectOptions::new()
        .host(&settings.host)
        .port(port)
        .username(&settings.user)
        .password(settings.password.as_str())
        .database(&settings.database_name)
        .ssl_mode(PgSslMode::Disable))
}

/// Open one connection, ping it and close it.
///
/// The attempt is bounded by `timeout` when one is configured.
async fn check_postgres_liveness(
    options: &PgConnectOptions,
    timeout: Option<Duration>,
) -> Result<(), sqlx::Error> {
    let connect = PgConnection::connect_with(options);
    let mut conn = match timeout {
        Some(limit) => tokio::time::timeout(limit, connect).await.map_err(|_| {
            sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                format!("connection attempt timed out after {}s", limit.as_secs()),
            ))
        })??,
        None => connect.await?,
    };

    conn.ping().await?;
    conn.close().await
}

/// Apply pool limits shared by both backends
fn pool_options<DB: Database>(settings: &PoolSettings) -> PoolOptions<DB> {
    let options = PoolOptions::<DB>::new()
        .max_connections(settings.max_connections)
        .min_connections(0)
        .idle_timeout(settings.idle_timeout())
        .max_lifetime(settings.max_lifetime);

    match settings.connect_timeout {
        Some(timeout) => options.acquire_timeout(timeout),
        None => options,
    }
}

/// Create the data directory and any missing parents
async fn create_data_dir(path: &Path) -> std::io::Result<()> {
    let mut builder = tokio::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(DATA_DIR_MODE);
    builder.create(path).await
}
