//! Error Types
//!
//! Failures raised while bringing a database pool online. Each variant names
//! the stage that failed and wraps the driver or OS error underneath it.

use thiserror::Error;

/// Errors returned by the connection bootstrapper
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("could not create dbdata directory: {0}")]
    CreateDirectory(#[source] std::io::Error),

    #[error("failed to open postgres connection: {0}")]
    OpenPostgres(#[source] sqlx::Error),

    #[error("failed to ping postgres database: {0}")]
    PingPostgres(#[source] sqlx::Error),

    #[error("failed to open sqlite database: {0}")]
    OpenSqlite(#[source] sqlx::Error),

    #[error("failed to ping sqlite database: {0}")]
    PingSqlite(#[source] sqlx::Error),
}

impl BootstrapError {
    /// Short machine-readable code for the failed stage
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::CreateDirectory(_) => "CREATE_DIRECTORY",
            Self::OpenPostgres(_) | Self::OpenSqlite(_) => "OPEN_FAILED",
            Self::PingPostgres(_) | Self::PingSqlite(_) => "PING_FAILED",
        }
    }
}
