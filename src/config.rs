//! Configuration management for the Rolo server.
//!
//! This module handles loading and validating configuration from environment
//! variables, with optional `.env` support for local development.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Lowest bcrypt cost the hashing backend accepts.
const MIN_BCRYPT_COST: u32 = 4;
/// Highest bcrypt cost the hashing backend accepts.
const MAX_BCRYPT_COST: u32 = 31;

/// Configuration for the Rolo server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the listener to (default: "0.0.0.0")
    pub bind_addr: String,

    /// Port to listen on (default: 7000)
    pub port: u16,

    /// SQLite database URL (default: "sqlite:contacts.db")
    pub database_url: String,

    /// Secret used to sign and verify bearer tokens
    pub jwt_secret: String,

    /// Token lifetime in days (default: 7)
    pub token_ttl_days: i64,

    /// bcrypt work factor for password hashing (default: 12)
    pub bcrypt_cost: u32,

    /// Maximum connections in the database pool (default: 5)
    pub db_max_connections: u32,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `JWT_SECRET`: Secret for signing bearer tokens
    ///
    /// Optional environment variables:
    /// - `BIND_ADDR`: Listener address (default: "0.0.0.0")
    /// - `PORT`: Listener port (default: 7000)
    /// - `DATABASE_URL`: SQLite database URL (default: "sqlite:contacts.db")
    /// - `TOKEN_TTL_DAYS`: Token lifetime in days (default: 7)
    /// - `BCRYPT_COST`: bcrypt work factor, 4-31 (default: 12)
    /// - `DB_MAX_CONNECTIONS`: Pool size (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, without failing when it is absent
        let _ = dotenvy::dotenv();

        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET".to_string()))?;

        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "JWT_SECRET".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = Self::parse_env_u16("PORT", 7000)?;
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:contacts.db".to_string());

        let token_ttl_days = Self::parse_env_i64("TOKEN_TTL_DAYS", 7)?;
        if token_ttl_days < 1 {
            return Err(ConfigError::InvalidValue {
                var: "TOKEN_TTL_DAYS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let bcrypt_cost = Self::parse_env_u32("BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                var: "BCRYPT_COST".to_string(),
                reason: format!("Must be between {} and {}", MIN_BCRYPT_COST, MAX_BCRYPT_COST),
            });
        }

        let db_max_connections = Self::parse_env_u32("DB_MAX_CONNECTIONS", 5)?;
        if db_max_connections < 1 {
            return Err(ConfigError::InvalidValue {
                var: "DB_MAX_CONNECTIONS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            bind_addr,
            port,
            database_url,
            jwt_secret,
            token_ttl_days,
            bcrypt_cost,
            db_max_connections,
            log_level,
        })
    }

    /// The socket address the server should bind.
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDR".to_string(),
                reason: format!("Not a valid address: {}", self.bind_addr),
            })
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "0.0.0.0".to_string(),
            port: 7000,
            database_url: "sqlite:contacts.db".to_string(),
            jwt_secret: String::new(),
            token_ttl_days: 7,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            db_max_connections: 5,
            log_level: "info".to_string(),
        }
    }
}
