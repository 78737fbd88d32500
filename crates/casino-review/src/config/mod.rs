use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::catalog::CatalogServiceConfig;
use crate::query::DEFAULT_PAGE_SIZE;
use crate::rating::CategoryAveraging;

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

/// Top-level configuration for the review site.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub catalog: CatalogConfig,
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
            catalog: CatalogConfig::from_env()?,
        })
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

/// Where the catalog comes from and how listings are computed.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// JSON snapshot to seed the store with. The bundled demo catalog is used when unset.
    pub snapshot_path: Option<PathBuf>,
    /// Casino CSV export merged over the snapshot on startup.
    pub casinos_csv: Option<PathBuf>,
    pub page_size: usize,
    pub category_averaging: CategoryAveraging,
    pub rank_by_aggregated: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            casinos_csv: None,
            page_size: DEFAULT_PAGE_SIZE,
            category_averaging: CategoryAveraging::default(),
            rank_by_aggregated: false,
        }
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let snapshot_path = path_var("CATALOG_PATH");
        let casinos_csv = path_var("CATALOG_CASINOS_CSV");

        let page_size = match env::var("CATALOG_PAGE_SIZE") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidPageSize { value: raw }),
            },
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let category_averaging = match env::var("RATING_CATEGORY_AVERAGING") {
            Ok(raw) => CategoryAveraging::parse(&raw)
                .ok_or(ConfigError::InvalidAveraging { value: raw })?,
            Err(_) => CategoryAveraging::default(),
        };

        let rank_by_aggregated = match env::var("CATALOG_RANK_BY_AGGREGATED") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                name: "CATALOG_RANK_BY_AGGREGATED",
                value: raw,
            })?,
            Err(_) => false,
        };

        Ok(Self {
            snapshot_path,
            casinos_csv,
            page_size,
            category_averaging,
            rank_by_aggregated,
        })
    }

    pub fn service_config(&self) -> CatalogServiceConfig {
        CatalogServiceConfig {
            page_size: self.page_size,
            category_averaging: self.category_averaging,
            rank_by_aggregated: self.rank_by_aggregated,
        }
    }
}

fn path_var(name: &str) -> Option<PathBuf> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPageSize { value: String },
    InvalidAveraging { value: String },
    InvalidFlag { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPageSize { value } => write!(
                f,
                "CATALOG_PAGE_SIZE must be a positive integer, found '{}'",
                value
            ),
            ConfigError::InvalidAveraging { value } => write!(
                f,
                "RATING_CATEGORY_AVERAGING must be 'zero-fill' or 'skip-missing', found '{}'",
                value
            ),
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{} must be true or false, found '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
