// src/config.rs

use std::env;
use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
}

fn var_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Reads the process environment; call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        Ok(Self {
            database_url,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: var_or("PORT", 3001),
            db_max_connections: var_or("DB_MAX_CONNECTIONS", 10),
            db_acquire_timeout: Duration::from_secs(var_or("DB_ACQUIRE_TIMEOUT_SECS", 5)),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
