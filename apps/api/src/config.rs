use std::time::Duration;

use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Sessions untouched for longer than this are evicted by the sweeper.
    pub session_idle_ttl: Duration,
    pub session_sweep_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: parse_env("PORT", 8080u16).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_idle_ttl: Duration::from_secs(
                parse_env("SESSION_IDLE_TTL_SECS", 3600u64)
                    .context("SESSION_IDLE_TTL_SECS must be a number of seconds")?,
            ),
            session_sweep_interval: Duration::from_secs(
                parse_env("SESSION_SWEEP_INTERVAL_SECS", 60u64)
                    .context("SESSION_SWEEP_INTERVAL_SECS must be a number of seconds")?,
            ),
        };
        ensure!(
            !config.session_sweep_interval.is_zero(),
            "SESSION_SWEEP_INTERVAL_SECS must be greater than zero"
        );
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            session_idle_ttl: Duration::from_secs(3600),
            session_sweep_interval: Duration::from_secs(60),
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
