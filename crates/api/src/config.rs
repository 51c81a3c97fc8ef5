use std::path::PathBuf;
use std::str::FromStr;

use globetrotter_core::invite::DEFAULT_INVITE_BASE_URL;

/// Which [`globetrotter_db::QuizStore`] backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store backend '{other}'")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development, and a malformed
/// value falls back to its default with a warning instead of aborting
/// startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    pub database_url: String,
    pub store_backend: StoreBackend,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long a query waits for a database connection before the store is
    /// reported unavailable (default: `5`).
    pub db_acquire_timeout_secs: u64,
    /// Prefix for generated invite links; the token is appended as a path
    /// segment.
    pub invite_base_url: String,
    /// Optional JSON file of destinations to load into an empty store.
    pub seed_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                                  |
    /// |---------------------------|------------------------------------------|
    /// | `HOST`                    | `0.0.0.0`                                |
    /// | `PORT`                    | `5000`                                   |
    /// | `DATABASE_URL`            | `postgres://localhost:5432/globetrotter` |
    /// | `STORE_BACKEND`           | `postgres`                               |
    /// | `CORS_ORIGINS`            | `http://localhost:3000`                  |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                                     |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                                      |
    /// | `INVITE_BASE_URL`         | `http://localhost:3000/challenge`        |
    /// | `SEED_FILE`               | unset                                    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let cors_origins: Vec<String> = string_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host: string_or("HOST", "0.0.0.0"),
            port: parse_or(&lookup, "PORT", 5000),
            database_url: string_or("DATABASE_URL", "postgres://localhost:5432/globetrotter"),
            store_backend: parse_or(&lookup, "STORE_BACKEND", StoreBackend::Postgres),
            cors_origins,
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30),
            db_acquire_timeout_secs: parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5),
            invite_base_url: string_or("INVITE_BASE_URL", DEFAULT_INVITE_BASE_URL),
            seed_file: lookup("SEED_FILE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Parse `key` if present, otherwise (or on a parse failure) use `default`.
fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, ?default, "Invalid config value, using default");
            default
        }),
    }
}
