//! Connection Configuration Model
//!
//! Decides which backend to open from the state of the environment.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use zeroize::Zeroizing;

use crate::domain::gateways::EnvSource;

pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";

/// Subdirectory of the base path holding the SQLite database
pub const SQLITE_DATA_DIR: &str = "dbdata";

/// SQLite database file name inside [`SQLITE_DATA_DIR`]
pub const SQLITE_DATABASE_FILE: &str = "users.db";

/// PostgreSQL connection parameters, taken verbatim from the environment
#[derive(Clone, PartialEq, Eq)]
pub struct PostgresSettings {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: Zeroizing<String>,
    pub database_name: String,
}

impl PostgresSettings {
    /// Connect timeout carried in the connection string, in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Keyword/value connection string with the password masked
    #[must_use]
    pub fn redacted_dsn(&self) -> String {
        format!(
            "user={} password=***** dbname={} host={} port={} sslmode=disable connect_timeout={}",
            self.user,
            self.database_name,
            self.host,
            self.port,
            Self::CONNECT_TIMEOUT_SECS
        )
    }
}

impl fmt::Debug for PostgresSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"*****")
            .field("database_name", &self.database_name)
            .finish()
    }
}

/// Location of the embedded SQLite database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteSettings {
    /// Directory holding the database file
    pub path: PathBuf,
}

impl SqliteSettings {
    /// Foreign-key enforcement on every connection
    pub const FOREIGN_KEYS: bool = true;

    /// How long a connection waits on a locked database
    pub const BUSY_TIMEOUT: Duration = Duration::from_millis(3000);

    /// Journal mode applied to the database file
    pub const JOURNAL_MODE: &'static str = "WAL";

    /// The applied driver options, in query-string form
    #[must_use]
    pub fn driver_options() -> String {
        format!(
            "_pragma=foreign_keys({})&_busy_timeout={}&_journal_mode={}",
            u8::from(Self::FOREIGN_KEYS),
            Self::BUSY_TIMEOUT.as_millis(),
            Self::JOURNAL_MODE
        )
    }

    /// Full path of the database file
    #[must_use]
    pub fn database_file(&self) -> PathBuf {
        self.path.join(SQLITE_DATABASE_FILE)
    }
}

/// Backend selected for this process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionConfig {
    Postgres(PostgresSettings),
    Sqlite(SqliteSettings),
}

impl ConnectionConfig {
    /// Backend name, for logs
    #[must_use]
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

/// Pick the backend from the environment.
///
/// PostgreSQL is chosen only when all five `DB_*` variables are set and
/// non-empty. Any gap falls back to SQLite under `base_path/dbdata`.
pub fn resolve_config(base_path: &Path, env: &dyn EnvSource) -> ConnectionConfig {
    let user = env.non_empty(DB_USER);
    let password = env.non_empty(DB_PASSWORD);
    let database_name = env.non_empty(DB_NAME);
    let host = env.non_empty(DB_HOST);
    let port = env.non_empty(DB_PORT);

    if let (Some(user), Some(password), Some(database_name), Some(host), Some(port)) =
        (user, password, database_name, host, port)
    {
        return ConnectionConfig::Postgres(PostgresSettings {
            host,
            port,
            user,
            password: Zeroizing::new(password),
            database_name,
        });
    }

    tracing::debug!(
        base_path = %base_path.display(),
        "PostgreSQL environment incomplete, using SQLite"
    );

    ConnectionConfig::Sqlite(SqliteSettings {
        path: base_path.join(SQLITE_DATA_DIR),
    })
}
