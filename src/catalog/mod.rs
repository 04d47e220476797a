//! Catalog
//!
//! The static, read-only list of products on sale. The catalog is built once
//! and never mutated; the cart only ever reads from it when resolving a slug.

use std::{fs, path::Path};

use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::products::Product;

pub mod fixture;

const CISKO_CATALOG: &str = include_str!("../../fixtures/catalog/cisko.yml");

/// Catalog Errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// A product has a negative price
    #[error("Product {0} has a negative price")]
    NegativePrice(String),

    /// Two products share a slug
    #[error("Duplicate product slug: {0}")]
    DuplicateSlug(String),

    /// Two products share an id
    #[error("Duplicate product id: {0}")]
    DuplicateId(u32),

    /// The catalog file lists no products, so the currency is unknown
    #[error("Catalog has no products; currency unknown")]
    NoProducts,
}

/// Catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    slugs: FxHashMap<String, usize>,
    currency: &'static Currency,
}

impl Catalog {
    /// Build a catalog from the given products.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if a product is priced in another currency,
    /// has a negative price, or reuses a slug or id.
    pub fn new(products: Vec<Product>, currency: &'static Currency) -> Result<Self, CatalogError> {
        let mut slugs = FxHashMap::default();
        let mut ids = FxHashSet::default();

        for (idx, product) in products.iter().enumerate() {
            let product_currency = product.price.currency();

            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    currency.iso_alpha_code.to_string(),
                    product_currency.iso_alpha_code.to_string(),
                ));
            }

            if product.price_minor() < 0 {
                return Err(CatalogError::NegativePrice(product.slug.clone()));
            }

            if slugs.insert(product.slug.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateSlug(product.slug.clone()));
            }

            if !ids.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self {
            products,
            slugs,
            currency,
        })
    }

    /// The built-in Cisko catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the embedded catalog is invalid.
    pub fn cisko() -> Result<Self, CatalogError> {
        Self::from_yaml_str(CISKO_CATALOG)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or parsed, or if
    /// the products it lists are inconsistent.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        debug!(path = %path.display(), "loading catalog");

        Self::from_yaml_str(&contents)
    }

    /// Parse a catalog from YAML.
    ///
    /// The currency is taken from the first product; every other product
    /// must use the same one.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the YAML is invalid, lists no products,
    /// or the products are inconsistent.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: fixture::CatalogFixture = serde_norway::from_str(yaml)?;

        let products = fixture
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let currency = products
            .first()
            .map(|product| product.price.currency())
            .ok_or(CatalogError::NoProducts)?;

        Self::new(products, currency)
    }

    /// Find a product by slug.
    pub fn find(&self, slug: &str) -> Option<&Product> {
        self.slugs
            .get(slug)
            .and_then(|&idx| self.products.get(idx))
    }

    /// Products whose name or description contains the query, ignoring case.
    ///
    /// A blank query matches every product.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();

        self.products
            .iter()
            .filter(|product| needle.is_empty() || product.matches(&needle))
            .collect()
    }

    /// Iterate over the products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
