//! Pool Settings
//!
//! Tuning values applied to a connection pool when it is opened.

use std::time::Duration;

/// Connection pool limits for one backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    /// Idle connections worth keeping around.
    ///
    /// sqlx cannot cap the idle count directly, and the pool never opens
    /// connections on its own (no minimum is set). The value instead picks
    /// how long a released connection may sit idle, see
    /// [`PoolSettings::idle_timeout`].
    pub max_idle_connections: u32,
    pub max_lifetime: Duration,
    /// `None` leaves the driver default in place.
    pub connect_timeout: Option<Duration>,
}

impl PoolSettings {
    /// Idle period after which a pooled connection is closed
    pub const IDLE_TIMEOUT: Duration = Duration::from_secs(5 * 60);

    /// Idle period used when no idle connections are allowed
    pub const NO_IDLE_TIMEOUT: Duration = Duration::from_secs(1);

    /// Defaults for a PostgreSQL server
    pub const POSTGRES_DEFAULT: Self = Self {
        max_connections: 10,
        max_idle_connections: 5,
        max_lifetime: Duration::from_secs(30 * 60),
        connect_timeout: Some(Duration::from_secs(10)),
    };

    /// Defaults for an embedded SQLite file. SQLite allows a single writer,
    /// so the pool never grows past one connection.
    pub const SQLITE_DEFAULT: Self = Self {
        max_connections: 1,
        max_idle_connections: 1,
        max_lifetime: Duration::from_secs(30 * 60),
        connect_timeout: None,
    };

    /// Check the limits are coherent
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated constraint.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_connections == 0 {
            return Err("max_connections must be at least 1".to_string());
        }
        if self.max_idle_connections > self.max_connections {
            return Err(format!(
                "max_idle_connections ({}) exceeds max_connections ({})",
                self.max_idle_connections, self.max_connections
            ));
        }
        if self.max_lifetime.is_zero() {
            return Err("max_lifetime must be greater than zero".to_string());
        }
        Ok(())
    }

    /// How long a released connection may stay open unused
    #[must_use]
    pub fn idle_timeout(&self) -> Duration {
        if self.max_idle_connections == 0 {
            Self::NO_IDLE_TIMEOUT
        } else {
            Self::IDLE_TIMEOUT
        }
    }
}

/// Pool settings for both backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolDefaults {
    pub postgres: PoolSettings,
    pub sqlite: PoolSettings,
}

impl Default for PoolDefaults {
    fn default() -> Self {
        Self {
            postgres: PoolSettings::POSTGRES_DEFAULT,
            sqlite: PoolSettings::SQLITE_DEFAULT,
        }
    }
}
