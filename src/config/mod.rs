use std::env;
use std::fmt;

use crate::fleet::inspection::InspectionPolicy;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the upkeep services.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub policy: InspectionPolicy,
}

impl AppConfig {
    /// Load configuration from the environment, falling back to the
    /// regulatory defaults for every urgency threshold.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut policy = InspectionPolicy::default();
        policy.urgent_within_days = day_count("APP_URGENT_WITHIN_DAYS", policy.urgent_within_days)?;
        policy.upcoming_within_days =
            day_count("APP_UPCOMING_WITHIN_DAYS", policy.upcoming_within_days)?;
        policy.planned_within_days =
            day_count("APP_PLANNED_WITHIN_DAYS", policy.planned_within_days)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            policy,
        })
    }
}

fn day_count(key: &'static str, fallback: i64) -> Result<i64, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidDayCount { key }),
        Err(_) => Ok(fallback),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidDayCount { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDayCount { key } => {
                write!(f, "{key} must be a whole number of days")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
