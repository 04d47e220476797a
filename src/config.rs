//! Storefront configuration.

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    cart::CART_KEY,
    catalog::{Catalog, CatalogError},
    checkout::Checkout,
    storage::FileStorage,
};

/// Configuration Errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Compact,

    /// Structured JSON output
    Json,
}

/// Storefront Configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Shop name used in order messages
    pub shop_name: String,

    /// Address receiving order messages
    pub order_email: String,

    /// Storage key of the cart document
    pub storage_key: String,

    /// Directory holding persisted state
    pub data_dir: PathBuf,

    /// Catalog file; the built-in catalog is used when unset
    pub catalog: Option<PathBuf>,

    /// Default log level when `RUST_LOG` is unset
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            shop_name: "CISKO".to_string(),
            order_email: "contact@cisko-shop.example".to_string(),
            storage_key: CART_KEY.to_string(),
            data_dir: PathBuf::from(".cisko"),
            catalog: None,
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from a YAML file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// Parse configuration from YAML. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the YAML is invalid.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_norway::from_str(yaml)?)
    }

    /// Load the configured catalog, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the catalog cannot be loaded.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::from_path(path),
            None => Catalog::cisko(),
        }
    }

    /// File storage rooted at the data directory.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }

    /// Checkout for this shop, priced in the catalog's currency.
    pub fn checkout(&self, catalog: &Catalog) -> Checkout {
        Checkout::new(&self.shop_name, &self.order_email, catalog.currency())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn empty_yaml_yields_defaults() -> TestResult {
        assert_eq!(StorefrontConfig::from_yaml_str("")?, StorefrontConfig::default());

        Ok(())
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() -> TestResult {
        let config = StorefrontConfig::from_yaml_str(
            "order_email: orders@example.test\nlog_format: json\n",
        )?;

        assert_eq!(config.order_email, "orders@example.test");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.shop_name, "CISKO");
        assert_eq!(config.storage_key, CART_KEY);

        Ok(())
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = StorefrontConfig::from_yaml_str("log_format: [nope");

        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn unset_catalog_uses_built_in() -> TestResult {
        let catalog = StorefrontConfig::default().catalog()?;

        assert!(catalog.find("bonnet").is_some());

        Ok(())
    }

    #[test]
    fn from_path_reads_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cisko.yml");

        std::fs::write(&path, "shop_name: Demo\ndata_dir: /tmp/demo\n")?;

        let config = StorefrontConfig::from_path(&path)?;

        assert_eq!(config.shop_name, "Demo");
        assert_eq!(config.storage().dir(), Path::new("/tmp/demo"));

        Ok(())
    }
}
