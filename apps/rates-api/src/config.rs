//! Application configuration module.
//!
//! Listening address comes from environment variables with fallback to
//! defaults; the rate catalog comes from an optional TOML file.
//!
//! ## Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PORT            listening port            (default: 8016)             │
//! │  BIND_ADDR       listening interface       (default: 0.0.0.0)          │
//! │  ENVIOS_CATALOG  path to catalog TOML      (default: compiled catalog) │
//! │                                                                         │
//! │  A partial catalog file overrides only the sections it names; the      │
//! │  rest keeps the compiled production defaults.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::env;
use std::path::PathBuf;

use envios_core::{CatalogError, RateCatalog};
use tracing::{debug, info};

/// HTTP application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listening port.
    pub port: u16,

    /// Bind address (default: 0.0.0.0).
    pub bind_addr: String,

    /// Optional catalog file path.
    pub catalog_path: Option<PathBuf>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
            Err(_) => 8016,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());

        let catalog_path = env::var("ENVIOS_CATALOG").ok().map(PathBuf::from);

        Ok(ApiConfig {
            port,
            bind_addr,
            catalog_path,
        })
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Loads and validates the rate catalog.
    ///
    /// No file configured (or file missing) → compiled production catalog.
    /// A present-but-broken file is a hard error: better to refuse boot
    /// than to quote stale prices.
    pub fn load_catalog(&self) -> Result<RateCatalog, ConfigError> {
        let catalog = match &self.catalog_path {
            Some(path) if path.exists() => {
                info!(?path, "Loading rate catalog from file");
                let contents = std::fs::read_to_string(path)
                    .map_err(|e| ConfigError::CatalogRead(e.to_string()))?;
                toml::from_str(&contents).map_err(|e| ConfigError::CatalogParse(e.to_string()))?
            }
            Some(path) => {
                debug!(?path, "Catalog file not found, using compiled defaults");
                RateCatalog::production()
            }
            None => RateCatalog::production(),
        };

        catalog.validate()?;
        Ok(catalog)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Failed to read catalog file: {0}")]
    CatalogRead(String),

    #[error("Failed to parse catalog file: {0}")]
    CatalogParse(String),

    #[error("Catalog validation failed: {0}")]
    CatalogInvalid(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_catalog_path_uses_defaults() {
        let config = ApiConfig {
            port: 8016,
            bind_addr: "127.0.0.1".to_string(),
            catalog_path: Some(PathBuf::from("/nonexistent/catalog.toml")),
        };
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.rates.bogota.service_id, 10001);
    }

    #[test]
    fn test_bind_address() {
        let config = ApiConfig {
            port: 9000,
            bind_addr: "127.0.0.1".to_string(),
            catalog_path: None,
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }
}
