use crate::workflows::leads::PipelineConfig;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub pipeline: PipelineConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            pipeline: load_pipeline_config()?,
        })
    }
}

fn load_pipeline_config() -> Result<PipelineConfig, ConfigError> {
    let mut pipeline = PipelineConfig::default();

    if let Some(days) = read_days("LEADS_MIN_DAYS_OLD")? {
        pipeline.min_days_old = days;
    }
    if let Some(days) = read_days("LEADS_MAX_DAYS_OLD")? {
        pipeline.max_days_old = days;
    }
    if pipeline.min_days_old > pipeline.max_days_old {
        return Err(ConfigError::InvertedAgeWindow {
            min: pipeline.min_days_old,
            max: pipeline.max_days_old,
        });
    }

    if let Ok(state) = env::var("LEADS_DEFAULT_STATE") {
        let state = state.trim().to_ascii_uppercase();
        if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidState(state));
        }
        pipeline.jurisdiction.default_state = state;
    }

    Ok(pipeline)
}

fn read_days(key: &'static str) -> Result<Option<i64>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|days| *days >= 0)
            .map(Some)
            .ok_or(ConfigError::InvalidDays { key }),
        Err(_) => Ok(None),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDays { key: &'static str },
    InvertedAgeWindow { min: i64, max: i64 },
    InvalidState(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDays { key } => {
                write!(f, "{key} must be a non-negative whole number of days")
            }
            ConfigError::InvertedAgeWindow { min, max } => write!(
                f,
                "LEADS_MIN_DAYS_OLD ({min}) must not exceed LEADS_MAX_DAYS_OLD ({max})"
            ),
            ConfigError::InvalidState(value) => {
                write!(f, "LEADS_DEFAULT_STATE '{value}' is not a two-letter state code")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidDays { .. }
            | ConfigError::InvertedAgeWindow { .. }
            | ConfigError::InvalidState(_) => None,
        }
    }
}
