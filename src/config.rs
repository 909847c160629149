// src/config.rs

use std::env;

use dotenvy::dotenv;

use crate::error::AppError;

/// Percentage below which a topic is recorded as a knowledge gap.
pub const DEFAULT_MASTERY_THRESHOLD: f64 = 60.0;

/// Token lifetime when `JWT_EXPIRATION` is not set (24h).
pub const DEFAULT_JWT_EXPIRATION: u64 = 86_400;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub rust_log: String,
    pub bind_addr: String,
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    pub mastery_threshold: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let jwt_expiration = match env::var("JWT_EXPIRATION") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|e| AppError::Config(format!("Invalid JWT_EXPIRATION: {}", e)))?,
            Err(_) => DEFAULT_JWT_EXPIRATION,
        };

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let mastery_threshold = match env::var("MASTERY_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => DEFAULT_MASTERY_THRESHOLD,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration,
            rust_log,
            bind_addr,
            admin_email: env::var("ADMIN_EMAIL").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
            mastery_threshold,
        })
    }
}

fn required(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Config(format!("{} must be set", name)))
}

/// Threshold is a percentage, so anything outside 0..=100 is a typo.
fn parse_threshold(raw: &str) -> Result<f64, AppError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| AppError::Config(format!("Invalid MASTERY_THRESHOLD: {}", e)))?;

    if !(0.0..=100.0).contains(&value) {
        return Err(AppError::Config(format!(
            "MASTERY_THRESHOLD must be between 0 and 100, got {}",
            value
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold_accepts_percentages() {
        assert_eq!(parse_threshold("60").unwrap(), 60.0);
        assert_eq!(parse_threshold(" 72.5 ").unwrap(), 72.5);
        assert_eq!(parse_threshold("0").unwrap(), 0.0);
        assert_eq!(parse_threshold("100").unwrap(), 100.0);
    }

    #[test]
    fn test_parse_threshold_rejects_out_of_range() {
        assert!(parse_threshold("100.1").is_err());
        assert!(parse_threshold("-5").is_err());
        assert!(parse_threshold("NaN").is_err());
        assert!(parse_threshold("sixty").is_err());
    }
}
