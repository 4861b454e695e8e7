//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required (postgres storage only)
//! - `ORDERS_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `ORDERS_STORAGE` - `postgres` or `memory` (default: postgres)
//! - `ORDERS_HOST` - Bind address (default: 0.0.0.0)
//! - `ORDERS_PORT` - Listen port (falls back to `PORT`, default: 3000)
//! - `ORDERS_PUBLIC_URL` - Server URL advertised in the API document
//! - `ORDERS_PAYMENT_DELAY_MS` - Simulated settlement delay (default: 3000)
//! - `ORDERS_PAYMENT_TIMEOUT_MS` - Bound on the settlement write (default: 10000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_PAYMENT_DELAY_MS: u64 = 3000;
const DEFAULT_PAYMENT_TIMEOUT_MS: u64 = 10_000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which document store backs the API.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// `PostgreSQL` via sqlx.
    Postgres {
        /// Connection URL (contains password)
        database_url: SecretString,
    },
    /// Process-local store; contents are lost on restart.
    Memory,
}

/// Settlement timing for the simulated payment endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentConfig {
    /// How long settlement is simulated to take.
    pub delay: Duration,
    /// Upper bound on the status write once the delay has elapsed.
    pub timeout: Duration,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_PAYMENT_DELAY_MS),
            timeout: Duration::from_millis(DEFAULT_PAYMENT_TIMEOUT_MS),
        }
    }
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Document store selection
    pub storage: StorageConfig,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL listed in the API document
    pub public_url: String,
    /// Simulated payment settlement timing
    pub payment: PaymentConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let vars = Vars(&lookup);

        let storage = match vars.or_default("ORDERS_STORAGE", "postgres").as_str() {
            "postgres" => StorageConfig::Postgres {
                database_url: vars
                    .first_of(&["ORDERS_DATABASE_URL", "DATABASE_URL"])
                    .map(SecretString::from)
                    .ok_or_else(|| ConfigError::MissingEnvVar("ORDERS_DATABASE_URL".to_string()))?,
            },
            "memory" => StorageConfig::Memory,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "ORDERS_STORAGE".to_string(),
                    format!("expected 'postgres' or 'memory', got '{other}'"),
                ));
            }
        };

        let host: IpAddr = vars.parsed("ORDERS_HOST", "0.0.0.0")?;
        let port: u16 = match vars.first_of(&["ORDERS_PORT", "PORT"]) {
            Some(value) => parse_value("ORDERS_PORT", &value)?,
            None => 3000,
        };
        let public_url = vars
            .get("ORDERS_PUBLIC_URL")
            .unwrap_or_else(|| format!("http://localhost:{port}"));

        let payment = PaymentConfig {
            delay: Duration::from_millis(vars.parsed(
                "ORDERS_PAYMENT_DELAY_MS",
                &DEFAULT_PAYMENT_DELAY_MS.to_string(),
            )?),
            timeout: Duration::from_millis(vars.parsed(
                "ORDERS_PAYMENT_TIMEOUT_MS",
                &DEFAULT_PAYMENT_TIMEOUT_MS.to_string(),
            )?),
        };

        Ok(Self {
            storage,
            host,
            port,
            public_url,
            payment,
            sentry_dsn: vars.get("SENTRY_DSN"),
            sentry_environment: vars.get("SENTRY_ENVIRONMENT"),
        })
    }

    /// Configuration for an in-memory instance, used by tests and demos.
    #[must_use]
    pub fn in_memory(payment: PaymentConfig) -> Self {
        Self {
            storage: StorageConfig::Memory,
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            public_url: "http://localhost:3000".to_string(),
            payment,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Thin wrapper adding typed accessors to a variable lookup.
struct Vars<'a, F>(&'a F);

impl<F: Fn(&str) -> Option<String>> Vars<'_, F> {
    /// Get a variable, treating empty values as unset.
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.is_empty())
    }

    /// First variable that is set, in priority order.
    fn first_of(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.get(key))
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a variable with a default value.
    fn parsed<T>(&self, key: &str, default: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        parse_value(key, &self.or_default(key, default))
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(key) if key == "ORDERS_DATABASE_URL"));
    }

    #[test]
    fn test_database_url_falls_back_to_generic_var() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/orders")]).unwrap();
        match config.storage {
            StorageConfig::Postgres { database_url } => {
                assert_eq!(database_url.expose_secret(), "postgres://localhost/orders");
            }
            StorageConfig::Memory => panic!("expected postgres storage"),
        }
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("ORDERS_STORAGE", "memory")]).unwrap();
        assert!(matches!(config.storage, StorageConfig::Memory));
        assert_eq!(config.port, 3000);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.public_url, "http://localhost:3000");
        assert_eq!(config.payment, PaymentConfig::default());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_port_falls_back_to_plain_port_var() {
        let config = load(&[("ORDERS_STORAGE", "memory"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.public_url, "http://localhost:8080");
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("ORDERS_STORAGE", "memory"), ("ORDERS_PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_unknown_storage_backend() {
        let err = load(&[("ORDERS_STORAGE", "mongo")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "ORDERS_STORAGE"));
    }

    #[test]
    fn test_payment_timing_override() {
        let config = load(&[
            ("ORDERS_STORAGE", "memory"),
            ("ORDERS_PAYMENT_DELAY_MS", "250"),
            ("ORDERS_PAYMENT_TIMEOUT_MS", "500"),
        ])
        .unwrap();
        assert_eq!(config.payment.delay, Duration::from_millis(250));
        assert_eq!(config.payment.timeout, Duration::from_millis(500));
    }
}
