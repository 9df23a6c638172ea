//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod database_connector;
pub mod env_source;

pub use database_connector::DatabaseConnector;
pub use env_source::EnvSource;
