//! Database Bootstrap
//!
//! Selects PostgreSQL or embedded SQLite from the environment, tunes the
//! connection pool, verifies it answers, and hands it to the caller.
//! Layered after Clean/Hexagonal Architecture principles.

use std::path::Path;
use std::sync::Arc;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::use_cases::InitializeDatabaseUseCase;
pub use domain::models::{ConnectionConfig, DatabaseHandle, PoolDefaults, PoolSettings};
pub use shared::errors::BootstrapError;

use infrastructure::driven_adapters::{ProcessEnv, SqlxConnector};

/// Open the process database with the built-in pool defaults.
///
/// PostgreSQL is used when `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_HOST`
/// and `DB_PORT` are all set; otherwise SQLite at `<base_path>/dbdata/users.db`.
///
/// # Errors
///
/// Returns `BootstrapError` naming the stage that failed.
pub async fn initialize_database(base_path: &Path) -> Result<DatabaseHandle, BootstrapError> {
    InitializeDatabaseUseCase::new(
        Arc::new(ProcessEnv),
        Arc::new(SqlxConnector::new()),
        PoolDefaults::default(),
    )
    .execute(base_path)
    .await
}
