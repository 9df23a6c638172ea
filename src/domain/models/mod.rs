//! Domain Models
//!
//! Value objects describing which database to open and how.

pub mod connection_config;
pub mod database_handle;
pub mod pool_settings;

pub use connection_config::{resolve_config, ConnectionConfig, PostgresSettings, SqliteSettings};
pub use database_handle::DatabaseHandle;
pub use pool_settings::{PoolDefaults, PoolSettings};
