//! Configuration module for the Spark Runs backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default lifetime of a transient notice, in milliseconds.
pub const DEFAULT_NOTICE_TTL_MS: u64 = 1800;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite file backing the key-value store
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Public page location used to build share links
    pub public_url: String,
    /// How long a notice stays visible
    pub notice_ttl: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let db_path = env::var("SPARK_DB_PATH")
            .unwrap_or_else(|_| "./data/spark.sqlite".to_string())
            .into();

        let bind_addr = env::var("SPARK_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| format!("Invalid SPARK_BIND_ADDR format: {}", e))?;

        let log_level = env::var("SPARK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let public_url =
            env::var("SPARK_PUBLIC_URL").unwrap_or_else(|_| "http://localhost:8080/".to_string());

        let notice_ttl_ms = match env::var("SPARK_NOTICE_TTL_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| format!("Invalid SPARK_NOTICE_TTL_MS: {}", e))?,
            Err(_) => DEFAULT_NOTICE_TTL_MS,
        };

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            public_url,
            notice_ttl: Duration::from_millis(notice_ttl_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("SPARK_DB_PATH");
        env::remove_var("SPARK_BIND_ADDR");
        env::remove_var("SPARK_LOG_LEVEL");
        env::remove_var("SPARK_PUBLIC_URL");
        env::remove_var("SPARK_NOTICE_TTL_MS");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/spark.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.public_url, "http://localhost:8080/");
        assert_eq!(config.notice_ttl, Duration::from_millis(1800));
    }
}
