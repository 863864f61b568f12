use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::profile::scoring::DEFAULT_CARD_LIMIT;

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
    pub scoring: ScoringSettings,
    pub predictor: Option<PredictorConfig>,
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

        let card_limit = parse_var::<f64>("SCORING_CARD_LIMIT")?.unwrap_or(DEFAULT_CARD_LIMIT);
        if !(card_limit.is_finite() && card_limit > 0.0) {
            return Err(ConfigError::InvalidNumber {
                key: "SCORING_CARD_LIMIT",
            });
        }

        let predictor = match env::var("PREDICTOR_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
        {
            Some(url) => Some(PredictorConfig::from_env(url)?),
            None => None,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            scoring: ScoringSettings { card_limit },
            predictor,
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key }),
        _ => Ok(None),
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
    /// Colored output, only enabled for local development.
    pub ansi: bool,
}

#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub card_limit: f64,
}

pub const DEFAULT_PREDICTOR_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_PREDICTOR_MAX_RETRIES: u32 = 2;
pub const DEFAULT_PREDICTOR_BACKOFF_MS: u64 = 200;

/// Remote predictor endpoint and its timeout/retry policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
}

impl PredictorConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into().trim().to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidPredictorUrl(base_url));
        }

        Ok(Self {
            base_url,
            timeout_ms: DEFAULT_PREDICTOR_TIMEOUT_MS,
            max_retries: DEFAULT_PREDICTOR_MAX_RETRIES,
            retry_backoff_ms: DEFAULT_PREDICTOR_BACKOFF_MS,
        })
    }

    fn from_env(base_url: String) -> Result<Self, ConfigError> {
        let mut config = Self::new(base_url)?;
        if let Some(timeout_ms) = parse_var::<u64>("PREDICTOR_TIMEOUT_MS")? {
            if timeout_ms == 0 {
                return Err(ConfigError::InvalidNumber {
                    key: "PREDICTOR_TIMEOUT_MS",
                });
            }
            config.timeout_ms = timeout_ms;
        }
        if let Some(max_retries) = parse_var::<u32>("PREDICTOR_MAX_RETRIES")? {
            config.max_retries = max_retries;
        }
        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPredictorUrl(String),
    InvalidNumber { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPredictorUrl(url) => {
                write!(f, "PREDICTOR_URL must start with http:// or https:// (got '{url}')")
            }
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a valid positive number")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidPredictorUrl(_)
            | ConfigError::InvalidNumber { .. } => None,
        }
    }
}
