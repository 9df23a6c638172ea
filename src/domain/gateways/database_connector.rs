//! Database Connector Gateway
//!
//! Abstract contract for opening, tuning and verifying a pool.

use async_trait::async_trait;

use crate::domain::models::{DatabaseHandle, PoolSettings, PostgresSettings, SqliteSettings};
use crate::shared::errors::BootstrapError;

/// Opens a verified connection pool for one backend
#[async_trait]
pub trait DatabaseConnector: Send + Sync {
    /// Open a PostgreSQL pool and ping it
    async fn open_postgres(
        &self,
        settings: &PostgresSettings,
        pool: &PoolSettings,
    ) -> Result<DatabaseHandle, BootstrapError>;

    /// Create the data directory, open the SQLite file and ping it
    async fn open_sqlite(
        &self,
        settings: &SqliteSettings,
        pool: &PoolSettings,
    ) -> Result<DatabaseHandle, BootstrapError>;
}
