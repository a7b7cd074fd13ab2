//! Database configuration schema.
//!
//! Deserialized from environment variables via the `config` crate.
//! `DEPMAP_DATABASE__URL` (and friends) take precedence; the
//! conventional `DATABASE_URL` variable is honored as a fallback.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Database connection pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `DEPMAP_DATABASE__*` variables, falling back to
    /// `DATABASE_URL` for the connection URL when the prefixed variable
    /// is absent.
    pub fn from_env() -> Result<Self, AppError> {
        let mut builder = config::Config::builder().add_source(
            config::Environment::with_prefix("DEPMAP_DATABASE")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_default("url", url)?;
        }

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_defaults() {
        let config: DatabaseConfig =
            serde_json::from_str(r#"{"url": "postgres://localhost/depmap"}"#)
                .expect("should deserialize");
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.min_connections, 5);
        assert_eq!(config.connect_timeout_seconds, 10);
        assert_eq!(config.idle_timeout_seconds, 300);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let config: DatabaseConfig = serde_json::from_str(
            r#"{"url": "postgres://localhost/depmap", "max_connections": 2, "min_connections": 1}"#,
        )
        .expect("should deserialize");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.min_connections, 1);
    }
}
