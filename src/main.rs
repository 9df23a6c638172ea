//! Database Bootstrap - Main Entry Point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use database_bootstrap::infrastructure::driven_adapters::{AppConfig, ProcessEnv, SqlxConnector};
use database_bootstrap::InitializeDatabaseUseCase;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "database_bootstrap=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    let pools = config.pool_defaults()?;
    tracing::info!("Configuration loaded successfully");

    let use_case = InitializeDatabaseUseCase::new(
        Arc::new(ProcessEnv),
        Arc::new(SqlxConnector::new()),
        pools,
    );
    let handle = match use_case.execute(&config.bootstrap.base_path).await {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "Database bootstrap failed");
            return Err(e.into());
        }
    };

    tracing::info!(
        backend = handle.backend(),
        max_connections = handle.max_connections(),
        base_path = %config.bootstrap.base_path.display(),
        "Database is reachable"
    );

    handle.close().await;
    Ok(())
}
