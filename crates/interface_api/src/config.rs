//! Environment-driven runtime configuration

use serde::Deserialize;

/// Runtime settings for the policies API.
///
/// Each field maps to an `API_`-prefixed environment variable
/// (`API_PORT`, `API_JWT_SECRET`, ...). Fields left unset fall back to
/// their development defaults individually, so a partial environment is
/// valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Secret used to sign and verify bearer tokens
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub jwt_expiration_secs: u64,
    /// PostgreSQL connection string
    pub database_url: String,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            database_url: "postgres://localhost/policies".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// The `host:port` pair to bind the listener to
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
