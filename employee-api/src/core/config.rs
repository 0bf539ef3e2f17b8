//! Server configuration

use std::fmt;
use std::str::FromStr;

use super::{Result, ServerError};

/// Where employee records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local, lost on restart
    Memory,
    /// SQLite database at `DATABASE_URL`
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(ServerError::Config(format!(
                "STORAGE_BACKEND must be 'memory' or 'sqlite', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 8080 | bind port |
/// | STORAGE_BACKEND | sqlite | `memory` or `sqlite` |
/// | DATABASE_URL | sqlite://employees.db?mode=rwc | SQLite connection string |
/// | DATABASE_MAX_CONNECTIONS | 5 | pool size |
/// | LOG_LEVEL | info | default filter when `RUST_LOG` is unset |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | (unset) | daily rotating log files |
/// | ENVIRONMENT | development | development / staging / production |
#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    pub storage: StorageBackend,
    pub database_url: String,
    pub database_max_connections: u32,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            http_host: var("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: parse_or(var("HTTP_PORT"), "HTTP_PORT", 8080)?,
            storage: match var("STORAGE_BACKEND") {
                Some(v) => v.parse()?,
                None => StorageBackend::Sqlite,
            },
            database_url: var("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://employees.db?mode=rwc".into()),
            database_max_connections: parse_or(
                var("DATABASE_MAX_CONNECTIONS"),
                "DATABASE_MAX_CONNECTIONS",
                5,
            )?,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: parse_or(var("LOG_JSON"), "LOG_JSON", false)?,
            log_dir: var("LOG_DIR"),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        })
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_host: "0.0.0.0".into(),
            http_port: 8080,
            storage: StorageBackend::Sqlite,
            database_url: "sqlite://employees.db?mode=rwc".into(),
            database_max_connections: 5,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            environment: "development".into(),
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, key: &str, default: T) -> Result<T> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ServerError::Config(format!("{key} has invalid value '{v}'"))),
        None => Ok(default),
    }
}
