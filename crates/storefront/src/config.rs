//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `REMAKEUP_API_URL` - Store backend base URL (default: `http://localhost:8080`)
//! - `REMAKEUP_SITE_URL` - Public site URL used in the sitemap (default: `https://remakeup.com.br`)
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `CATALOG_PAGE_SIZE` - Products per page (default: 12)
//! - `CAROUSEL_INTERVAL_SECS` - Carousel autoplay interval (default: 5)
//! - `CATALOG_CACHE_TTL_SECS` - Catalog snapshot lifetime (default: 300)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_SITE_URL: &str = "https://remakeup.com.br";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL of the site
    pub site_url: Url,
    /// Store backend configuration
    pub backend: BackendConfig,
    /// Catalog presentation settings
    pub catalog: CatalogConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

/// Store backend connection settings.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL every backend path is joined onto
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
}

/// Catalog presentation settings.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Products per page
    pub page_size: NonZeroUsize,
    /// Delay between automatic carousel advances
    pub carousel_interval: Duration,
    /// How long a loaded catalog snapshot is served before reloading
    pub cache_ttl: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: remakeup_core::catalog::DEFAULT_PAGE_SIZE,
            carousel_interval: Duration::from_secs(5),
            cache_ttl: Duration::from_secs(300),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let site_url = site_url_from_env()?;

        Ok(Self {
            host,
            port,
            site_url,
            backend: BackendConfig::from_env()?,
            catalog: CatalogConfig::from_env()?,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl BackendConfig {
    /// Load only the backend settings (used by the CLI).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `REMAKEUP_API_URL` is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            base_url: get_url("REMAKEUP_API_URL", DEFAULT_API_URL)?,
            timeout: Duration::from_secs(10),
        })
    }
}

/// Load only the public site URL (used by the CLI).
///
/// # Errors
///
/// Returns `ConfigError` if `REMAKEUP_SITE_URL` is not a valid URL.
pub fn site_url_from_env() -> Result<Url, ConfigError> {
    let _ = dotenvy::dotenv();
    get_url("REMAKEUP_SITE_URL", DEFAULT_SITE_URL)
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let page_size = get_positive("CATALOG_PAGE_SIZE", 12)?;
        let interval = get_positive("CAROUSEL_INTERVAL_SECS", 5)?;
        let ttl = get_positive("CATALOG_CACHE_TTL_SECS", 300)?;

        Ok(Self {
            page_size,
            carousel_interval: Duration::from_secs(interval.get() as u64),
            cache_ttl: Duration::from_secs(ttl.get() as u64),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Get a URL, falling back to a default.
fn get_url(key: &str, default: &str) -> Result<Url, ConfigError> {
    parse_url(key, &get_env_or_default(key, default))
}

fn parse_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

/// Get a strictly positive integer, falling back to a default.
fn get_positive(key: &str, default: usize) -> Result<NonZeroUsize, ConfigError> {
    match get_optional_env(key) {
        Some(value) => parse_positive(key, &value),
        None => NonZeroUsize::new(default).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string())),
    }
}

fn parse_positive(key: &str, value: &str) -> Result<NonZeroUsize, ConfigError> {
    value
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
