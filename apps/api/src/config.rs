//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! development defaults. Production deployments must set `JWT_SECRET`.

use std::env;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// Path to the SQLite database file
    pub database_path: String,

    /// JWT secret key for signing tokens
    pub jwt_secret: String,

    /// JWT token lifetime in seconds
    pub jwt_lifetime_secs: i64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "./stride.db".to_string()),

            jwt_secret: env::var("JWT_SECRET")
                // Development fallback; production MUST set this
                .unwrap_or_else(|_| "stride-dev-secret-change-in-production".to_string()),

            jwt_lifetime_secs: env::var("JWT_LIFETIME_SECS")
                .unwrap_or_else(|_| "86400".to_string()) // 24 hours
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_LIFETIME_SECS".to_string()))?,
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
