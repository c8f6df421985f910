// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: Option<String>,
    listen_addr: String,
    request_timeout: Duration,
    allowed_origins: Vec<String>,
    database_max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

/// Upper bound for `REQUEST_TIMEOUT_SECS` (one day).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 86_400;

const fn default_request_timeout_secs() -> u64 {
    30
}

const fn default_database_max_connections() -> u32 {
    16
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. A `.env` file, when
    /// present, is loaded first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let request_timeout_secs = parse_positive::<u64>(
            "REQUEST_TIMEOUT_SECS",
            lookup("REQUEST_TIMEOUT_SECS"),
        )?
        .unwrap_or_else(default_request_timeout_secs);
        if request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::Invalid(format!(
                "REQUEST_TIMEOUT_SECS must be at most {MAX_REQUEST_TIMEOUT_SECS}, got {request_timeout_secs}"
            )));
        }

        let database_max_connections = parse_positive::<u32>(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
        )?
        .unwrap_or_else(default_database_max_connections);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            listen_addr,
            request_timeout: Duration::from_secs(request_timeout_secs),
            allowed_origins,
            database_max_connections,
        })
    }

    /// `None` selects the in-memory store.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }
}

fn parse_positive<T>(key: &str, raw: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(Some(value)),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}
