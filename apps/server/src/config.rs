use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

/// Database file used by the server. Not read from the environment.
pub const DEFAULT_DB_PATH: &str = "database/budgetify.db";

pub const DEV_SECRET_KEY: &str = "dev_secret_key";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    /// Session-signing secret.
    pub secret_key: String,
    pub static_dir: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("BUDGETIFY_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .context("Invalid BUDGETIFY_LISTEN_ADDR")?;
        let secret_key = std::env::var("SECRET_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEV_SECRET_KEY.to_string());
        let static_dir = std::env::var("BUDGETIFY_STATIC_DIR")
            .unwrap_or_else(|_| concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string());
        let cors_allow = std::env::var("BUDGETIFY_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("BUDGETIFY_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Ok(Self {
            listen_addr,
            db_path: DEFAULT_DB_PATH.to_string(),
            secret_key,
            static_dir,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}
