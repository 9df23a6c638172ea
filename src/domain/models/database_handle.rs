//! Database Handle
//!
//! The live pool handed back to the caller once bootstrapping succeeds.

use sqlx::{Connection, PgPool, SqlitePool};

/// A verified connection pool for whichever backend was selected.
///
/// Cloning is cheap and every clone shares the same pool.
#[derive(Debug, Clone)]
pub enum DatabaseHandle {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl DatabaseHandle {
    /// Backend name, for logs
    #[must_use]
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Sqlite(_) => "sqlite",
        }
    }

    /// Maximum number of connections the pool will open
    #[must_use]
    pub fn max_connections(&self) -> u32 {
        match self {
            Self::Postgres(pool) => pool.options().get_max_connections(),
            Self::Sqlite(pool) => pool.options().get_max_connections(),
        }
    }

    /// Round-trip to the database on a pooled connection
    ///
    /// # Errors
    ///
    /// Returns the driver error if no connection can be acquired or the
    /// server does not answer.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match self {
            Self::Postgres(pool) => pool.acquire().await?.ping().await,
            Self::Sqlite(pool) => pool.acquire().await?.ping().await,
        }
    }

    /// Close every connection and wait for them to drop
    pub async fn close(&self) {
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
    }

    /// The PostgreSQL pool, if that backend was selected
    #[must_use]
    pub fn as_postgres(&self) -> Option<&PgPool> {
        match self {
            Self::Postgres(pool) => Some(pool),
            Self::Sqlite(_) => None,
        }
    }

    /// The SQLite pool, if that backend was selected
    #[must_use]
    pub fn as_sqlite(&self) -> Option<&SqlitePool> {
        match self {
            Self::Sqlite(pool) => Some(pool),
            Self::Postgres(_) => None,
        }
    }
}
