//! Domain Layer
//!
//! Contains the backend selection rules, pool settings and gateway traits (ports).

pub mod gateways;
pub mod models;

pub use gateways::{DatabaseConnector, EnvSource};
pub use models::{
    resolve_config, ConnectionConfig, DatabaseHandle, PoolDefaults, PoolSettings, PostgresSettings,
    SqliteSettings,
};
