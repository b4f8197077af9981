//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). The provider credential itself is not
//! part of [`ServiceConfig`]; only the name of the variable holding it is.
//! It is read from the process environment on every lookup through
//! [`ApiKeySource`], which never touches `.env` itself.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ServiceError;

/// Default OpenWeatherMap API root.
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://api.openweathermap.org";

/// Default environment variable holding the provider credential.
pub const DEFAULT_API_KEY_VAR: &str = "API_KEY";

/// Top-level service configuration.
///
/// Loaded once at startup via [`ServiceConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Socket address to bind the HTTP server to (e.g. `127.0.0.1:5000`).
    pub listen_addr: SocketAddr,

    /// SQLite connection string (e.g. `sqlite://weather.db`).
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// Outbound provider settings.
    pub provider: ProviderConfig,

    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

/// Settings for the outbound weather provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the provider API, without trailing slash.
    pub base_url: String,

    /// Where the credential comes from.
    pub api_key: ApiKeySource,

    /// Request timeout in seconds; `0` leaves the client default (none).
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// Returns the request timeout, if one is configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROVIDER_BASE_URL.to_string(),
            api_key: ApiKeySource::Env(DEFAULT_API_KEY_VAR.to_string()),
            timeout_secs: 0,
        }
    }
}

/// Source of the provider credential.
#[derive(Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// Read the named environment variable on each call. A `.env` file is
    /// only loaded once, by [`ServiceConfig::from_env`].
    Env(String),
    /// A fixed key, mainly for tests and embedding.
    Fixed(String),
}

impl ApiKeySource {
    /// Resolves the credential.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Configuration`] if the variable is unset
    /// or empty.
    pub fn resolve(&self) -> Result<String, ServiceError> {
        let key = match self {
            Self::Env(var) => std::env::var(var)
                .map_err(|_| ServiceError::Configuration(format!("{var} is not set")))?,
            Self::Fixed(key) => key.clone(),
        };
        if key.trim().is_empty() {
            return Err(ServiceError::Configuration(
                "provider credential is empty".to_string(),
            ));
        }
        Ok(key)
    }
}

// Keeps the credential out of logs.
impl std::fmt::Debug for ApiKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env(var) => f.debug_tuple("Env").field(var).finish(),
            Self::Fixed(_) => f.debug_tuple("Fixed").field(&"<redacted>").finish(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()?;

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://weather.db".to_string());

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 5);
        let database_connect_timeout_secs = parse_env("DATABASE_CONNECT_TIMEOUT_SECS", 5);

        let base_url = std::env::var("PROVIDER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PROVIDER_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let api_key_var =
            std::env::var("PROVIDER_API_KEY_VAR").unwrap_or_else(|_| DEFAULT_API_KEY_VAR.to_string());
        let timeout_secs = parse_env("PROVIDER_TIMEOUT_SECS", 0);

        let log_json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            database_connect_timeout_secs,
            provider: ProviderConfig {
                base_url,
                api_key: ApiKeySource::Env(api_key_var),
                timeout_secs,
            },
            log_json,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
