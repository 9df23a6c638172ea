//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database drivers
//! - Process environment
//! - Configuration

pub mod config;
pub mod database;
pub mod env;

pub use config::AppConfig;
pub use database::SqlxConnector;
pub use env::ProcessEnv;
