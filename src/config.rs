use std::env;

use crate::error::AppError;

/// Fallback secret for local development only. `main` logs a warning when
/// the service starts with this value.
pub const DEV_SIGNING_SECRET: &str = "insecure-dev-secret";

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub event_buffer_size: usize,
    pub quote_ttl_secs: i64,
    pub quote_signing_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            http_port: parse_or_default("HTTP_PORT", 3000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            event_buffer_size: parse_or_default("EVENT_BUFFER_SIZE", 1024)?,
            quote_ttl_secs: parse_or_default("QUOTE_TTL_SECS", 300)?,
            quote_signing_secret: env::var("QUOTE_SIGNING_SECRET")
                .unwrap_or_else(|_| DEV_SIGNING_SECRET.to_string()),
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
