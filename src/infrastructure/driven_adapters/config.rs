//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::models::{PoolDefaults, PoolSettings};

/// Bootstrap configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    /// Data root; SQLite lives under `<base_path>/dbdata`
    pub base_path: PathBuf,
}

/// Pool limits for one backend
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub max_idle_connections: u32,
    pub max_lifetime_secs: u64,
    pub connect_timeout_secs: Option<u64>,
}

impl From<PoolConfig> for PoolSettings {
    fn from(config: PoolConfig) -> Self {
        Self {
            max_connections: config.max_connections,
            max_idle_connections: config.max_idle_connections,
            max_lifetime: Duration::from_secs(config.max_lifetime_secs),
            connect_timeout: config.connect_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Pool limits for both backends
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PoolsConfig {
    pub postgres: PoolConfig,
    pub sqlite: PoolConfig,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub bootstrap: BootstrapConfig,
    pub pool: PoolsConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a pool limit is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Self::load_from(
            Path::new("config"),
            &run_mode,
            Environment::with_prefix("APP").separator("__"),
        )
    }

    /// Load from `dir`, layering `default`, then `run_mode`, then `environment`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a pool limit is invalid.
    pub fn load_from(
        dir: &Path,
        run_mode: &str,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        let defaults = PoolDefaults::default();

        // Built-in values, so a missing config directory still loads
        let builder = Config::builder().set_default("bootstrap.base_path", ".")?;
        let builder = set_pool_defaults(builder, "pool.postgres", &defaults.postgres)?;
        let builder = set_pool_defaults(builder, "pool.sqlite", &defaults.sqlite)?;

        let config: Self = builder
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(run_mode)).required(false))
            // Override with environment variables (e.g., APP__POOL__POSTGRES__MAX_CONNECTIONS)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.pool_defaults()?;
        Ok(config)
    }

    /// Pool settings for both backends, validated
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the backend with an invalid limit.
    pub fn pool_defaults(&self) -> Result<PoolDefaults, ConfigError> {
        let pools = PoolDefaults {
            postgres: self.pool.postgres.into(),
            sqlite: self.pool.sqlite.into(),
        };

        pools
            .postgres
            .validate()
            .map_err(|e| ConfigError::Message(format!("pool.postgres: {e}")))?;
        pools
            .sqlite
            .validate()
            .map_err(|e| ConfigError::Message(format!("pool.sqlite: {e}")))?;

        Ok(pools)
    }
}

/// Register a backend's built-in pool limits under `prefix`
fn set_pool_defaults(
    builder: ConfigBuilder<DefaultState>,
    prefix: &str,
    pool: &PoolSettings,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder
        .set_default(
            format!("{prefix}.max_connections"),
            i64::from(pool.max_connections),
        )?
        .set_default(
            format!("{prefix}.max_idle_connections"),
            i64::from(pool.max_idle_connections),
        )?
        .set_default(
            format!("{prefix}.max_lifetime_secs"),
            duration_secs(pool.max_lifetime),
        )?;

    match pool.connect_timeout {
        Some(timeout) => builder.set_default(
            format!("{prefix}.connect_timeout_secs"),
            duration_secs(timeout),
        ),
        None => Ok(builder),
    }
}

fn duration_secs(duration: Duration) -> i64 {
    i64::try_from(duration.as_secs()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env() -> Environment {
        Environment::with_prefix("APP")
            .separator("__")
            .source(Some(HashMap::new()))
    }

    fn env_of(pairs: &[(&str, &str)]) -> Environment {
        let map = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Environment::with_prefix("APP")
            .separator("__")
            .source(Some(map))
    }

    #[test]
    fn test_builtin_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();

        let config = AppConfig::load_from(dir.path(), "default", no_env()).unwrap();
        let pools = config.pool_defaults().unwrap();

        assert_eq!(config.bootstrap.base_path, PathBuf::from("."));
        assert_eq!(pools, PoolDefaults::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[bootstrap]\nbase_path = \"/var/lib/app\"\n\n[pool.postgres]\nmax_connections = 20\n",
        )
        .unwrap();

        let config = AppConfig::load_from(dir.path(), "default", no_env()).unwrap();
        let pools = config.pool_defaults().unwrap();

        assert_eq!(config.bootstrap.base_path, PathBuf::from("/var/lib/app"));
        assert_eq!(pools.postgres.max_connections, 20);
        assert_eq!(pools.postgres.max_idle_connections, 5);
        assert_eq!(pools.sqlite, PoolSettings::SQLITE_DEFAULT);
    }

    #[test]
    fn test_run_mode_file_layers_on_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[pool.sqlite]\nmax_lifetime_secs = 60\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("production.toml"),
            "[bootstrap]\nbase_path = \"/srv/data\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(dir.path(), "production", no_env()).unwrap();
        let pools = config.pool_defaults().unwrap();

        assert_eq!(config.bootstrap.base_path, PathBuf::from("/srv/data"));
        assert_eq!(pools.sqlite.max_lifetime, Duration::from_secs(60));
    }

    #[test]
    fn test_environment_overrides_pool_limits() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_of(&[
            ("APP__POOL__POSTGRES__MAX_CONNECTIONS", "32"),
            ("APP__POOL__POSTGRES__CONNECT_TIMEOUT_SECS", "3"),
        ]);

        let config = AppConfig::load_from(dir.path(), "default", env).unwrap();
        let pools = config.pool_defaults().unwrap();

        assert_eq!(pools.postgres.max_connections, 32);
        assert_eq!(pools.postgres.connect_timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_invalid_pool_limits_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_of(&[("APP__POOL__SQLITE__MAX_IDLE_CONNECTIONS", "4")]);

        let err = AppConfig::load_from(dir.path(), "default", env).unwrap_err();

        assert!(err.to_string().contains("pool.sqlite"));
    }

    #[test]
    fn test_shipped_default_file_matches_builtin_values() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("config");

        let config = AppConfig::load_from(&dir, "default", no_env()).unwrap();

        assert_eq!(config.pool_defaults().unwrap(), PoolDefaults::default());
    }
}
