//! Common test utilities for bootstrap tests
//!
//! Builds use cases against an in-memory environment, and spins up a
//! PostgreSQL container for the server-backed scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

use database_bootstrap::infrastructure::driven_adapters::SqlxConnector;
use database_bootstrap::{InitializeDatabaseUseCase, PoolDefaults};

/// Environment map from key/value pairs
pub fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Use case wired to the real sqlx connector and the given environment
pub fn use_case_with_env(env: HashMap<String, String>) -> InitializeDatabaseUseCase {
    InitializeDatabaseUseCase::new(
        Arc::new(env),
        Arc::new(SqlxConnector::new()),
        PoolDefaults::default(),
    )
}

/// A running PostgreSQL server
pub struct TestPostgres {
    pub host: String,
    pub port: u16,
    _container: ContainerAsync<Postgres>,
}

impl TestPostgres {
    /// Start a fresh PostgreSQL container
    pub async fn start() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container
            .get_host()
            .await
            .expect("Failed to get host")
            .to_string();
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        Self {
            host,
            port,
            _container: container,
        }
    }

    /// The five DB_* variables pointing at this server
    pub fn env(&self) -> HashMap<String, String> {
        let port = self.port.to_string();
        env_of(&[
            ("DB_USER", "postgres"),
            ("DB_PASSWORD", "postgres"),
            ("DB_NAME", "postgres"),
            ("DB_HOST", &self.host),
            ("DB_PORT", &port),
        ])
    }
}
