//! Initialize Database Use Case
//!
//! Resolves the backend from the environment and opens it.

use std::path::Path;
use std::sync::Arc;

use crate::domain::gateways::{DatabaseConnector, EnvSource};
use crate::domain::models::{resolve_config, ConnectionConfig, DatabaseHandle, PoolDefaults};
use crate::shared::errors::BootstrapError;

/// Use case for bringing the process database online
pub struct InitializeDatabaseUseCase {
    env: Arc<dyn EnvSource>,
    connector: Arc<dyn DatabaseConnector>,
    pools: PoolDefaults,
}

impl InitializeDatabaseUseCase {
    /// Create a new InitializeDatabaseUseCase
    #[must_use]
    pub fn new(
        env: Arc<dyn EnvSource>,
        connector: Arc<dyn DatabaseConnector>,
        pools: PoolDefaults,
    ) -> Self {
        Self {
            env,
            connector,
            pools,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns whatever `BootstrapError` the selected opener produced.
    pub async fn execute(&self, base_path: &Path) -> Result<DatabaseHandle, BootstrapError> {
        let config = resolve_config(base_path, self.env.as_ref());
        tracing::info!(backend = config.backend(), "Initializing database");

        let handle = match &config {
            ConnectionConfig::Postgres(settings) => {
                self.connector
                    .open_postgres(settings, &self.pools.postgres)
                    .await?
            }
            ConnectionConfig::Sqlite(settings) => {
                self.connector.open_sqlite(settings, &self.pools.sqlite).await?
            }
        };

        tracing::info!(
            backend = handle.backend(),
            max_connections = handle.max_connections(),
            "Database initialized"
        );
        Ok(handle)
    }
}
