//! Configuration Module
//!
//! Centralized configuration for the bloglist service, read from environment
//! variables (optionally loaded from a `.env` file by the binaries).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::error::{AppError, AppResult};

/// Environment variable helpers
pub mod env {
    use std::env;

    use crate::utils::error::{AppError, AppResult};

    /// Get environment variable as string with default
    pub fn get_string(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get optional environment variable, treating empty values as unset
    pub fn get_optional(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.trim().is_empty())
    }

    /// Get environment variable as u16 with default
    pub fn get_u16(key: &str, default: u16) -> u16 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u32 with default
    pub fn get_u32(key: &str, default: u32) -> u32 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u64 with default
    pub fn get_u64(key: &str, default: u64) -> u64 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get required environment variable
    pub fn get_required(key: &str) -> AppResult<String> {
        get_optional(key).ok_or_else(|| {
            AppError::Configuration(format!("Required environment variable {} is not set", key))
        })
    }
}

/// Which record store adapter the service runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(AppError::Configuration(format!(
                "Unknown STORE_BACKEND '{}', expected 'mongodb' or 'memory'",
                other
            ))),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::MongoDb => write!(f, "mongodb"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Application configuration combining all service configurations
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Record store configuration
    pub database: DatabaseConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

/// Record store configuration
#[derive(Clone)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub uri: String,
    /// Used instead of `uri` when `environment` is `test`
    pub test_uri: Option<String>,
    pub environment: String,
    pub database_name: String,
    pub connect_timeout_seconds: u64,
    pub operation_timeout_seconds: u64,
    pub max_pool_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3003,
            log_level: "info".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::MongoDb,
            uri: "mongodb://localhost:27017".to_string(),
            test_uri: None,
            environment: "development".to_string(),
            database_name: "bloglist".to_string(),
            connect_timeout_seconds: 10,
            operation_timeout_seconds: 5,
            max_pool_size: 10,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::get_string("SERVER_HOST", &defaults.host),
            port: env::get_u16("PORT", defaults.port),
            log_level: env::get_string("LOG_LEVEL", &defaults.log_level),
        }
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let backend = match env::get_optional("STORE_BACKEND") {
            Some(value) => value.parse()?,
            None => defaults.backend,
        };

        // MongoDB needs a URI; the in-memory store ignores it.
        let uri = match backend {
            StoreBackend::MongoDb => env::get_required("MONGODB_URI")?,
            StoreBackend::Memory => env::get_string("MONGODB_URI", &defaults.uri),
        };

        Ok(Self {
            backend,
            uri,
            test_uri: env::get_optional("TEST_MONGODB_URI"),
            environment: env::get_string("APP_ENV", &defaults.environment),
            database_name: env::get_string("MONGODB_DATABASE", &defaults.database_name),
            connect_timeout_seconds: env::get_u64(
                "DB_CONNECT_TIMEOUT",
                defaults.connect_timeout_seconds,
            ),
            operation_timeout_seconds: env::get_u64(
                "DB_OPERATION_TIMEOUT",
                defaults.operation_timeout_seconds,
            ),
            max_pool_size: env::get_u32("DB_MAX_POOL_SIZE", defaults.max_pool_size),
        })
    }

    /// Connection string for the current environment
    pub fn active_uri(&self) -> &str {
        match (&self.test_uri, self.environment.as_str()) {
            (Some(test_uri), "test") => test_uri.as_str(),
            _ => self.uri.as_str(),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_seconds)
    }
}

impl fmt::Debug for DatabaseConfig {
    // Connection strings may embed credentials.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("backend", &self.backend)
            .field("environment", &self.environment)
            .field("database_name", &self.database_name)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .field("operation_timeout_seconds", &self.operation_timeout_seconds)
            .field("max_pool_size", &self.max_pool_size)
            .finish_non_exhaustive()
    }
}

impl AppConfig {
    /// Load complete application configuration from environment
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()?,
        })
    }

    /// Validate the complete configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".into(),
            ));
        }

        if self.database.backend == StoreBackend::MongoDb && self.database.active_uri().is_empty()
        {
            return Err(AppError::Configuration(
                "MongoDB connection string cannot be empty".into(),
            ));
        }

        if self.database.database_name.is_empty() {
            return Err(AppError::Configuration(
                "Database name cannot be empty".into(),
            ));
        }

        if self.database.connect_timeout_seconds == 0 || self.database.operation_timeout_seconds == 0
        {
            return Err(AppError::Configuration(
                "Database timeouts must be greater than 0".into(),
            ));
        }

        if self.database.max_pool_size == 0 {
            return Err(AppError::Configuration(
                "Database max_pool_size must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
