use anyhow::{Context, Result};
use feed::{DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS};

/// Server configuration loaded from environment variables.
/// Every setting has a default, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub feed_timeout_secs: u64,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            feed_url: env_or("FEED_URL", DEFAULT_FEED_URL),
            feed_timeout_secs: env_or("FEED_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .context("FEED_TIMEOUT_SECS must be a whole number of seconds")?,
            host: env_or("HOST", "127.0.0.1"),
            port: env_or("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
