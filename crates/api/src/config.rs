use std::str::FromStr;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://todo.db`).
    pub database_url: String,
    /// Upper bound on pooled connections (default: `10`).
    pub db_max_connections: u32,
    /// How long a call waits for a free connection (default: `5`).
    pub db_acquire_timeout_secs: u64,
    /// Per-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Grace period for closing the pool after the server stops (default: `30`).
    pub shutdown_timeout_secs: u64,
}

/// A configuration value that is present but unusable.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default            |
    /// |---------------------------|--------------------|
    /// | `HOST`                    | `0.0.0.0`          |
    /// | `PORT`                    | `8080`             |
    /// | `DATABASE_URL`            | `sqlite://todo.db` |
    /// | `DB_MAX_CONNECTIONS`      | `10`               |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`               |
    /// | `SHUTDOWN_TIMEOUT_SECS`   | `30`               |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let text = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parse(&lookup, "PORT", 8080, "u16")?,
            database_url: text("DATABASE_URL", "sqlite://todo.db"),
            db_max_connections: parse(&lookup, "DB_MAX_CONNECTIONS", 10, "u32")?,
            db_acquire_timeout_secs: parse(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5, "u64")?,
            request_timeout_secs: parse(&lookup, "REQUEST_TIMEOUT_SECS", 30, "u64")?,
            shutdown_timeout_secs: parse(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30, "u64")?,
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError {
            var,
            expected,
            value,
        }),
    }
}
