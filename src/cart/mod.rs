//! Cart
//!
//! A cart document is an ordered list of line items, at most one per product
//! slug, each with a quantity of at least one. Line items carry a copy of the
//! product's name, price and image taken when the product was first added;
//! later catalog changes are not reflected.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{pricing, products::Product};

pub mod store;

pub use store::{CART_KEY, CartStore};

/// Errors raised when decoding a persisted cart document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The payload is not a JSON cart document.
    #[error("Failed to parse cart document: {0}")]
    Json(#[from] serde_json::Error),

    /// A line item has a quantity of zero.
    #[error("Line item {0} has a zero quantity")]
    ZeroQuantity(String),

    /// A line item has a negative price.
    #[error("Line item {0} has a negative price")]
    NegativePrice(String),

    /// Two line items share a slug.
    #[error("Duplicate line item: {0}")]
    DuplicateSlug(String),
}

/// A single cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Slug of the product this line refers to
    pub slug: String,

    /// Product name at the time of adding
    pub name: String,

    /// Unit price in minor units at the time of adding
    pub price: i64,

    /// Product image at the time of adding
    pub image: String,

    /// Quantity, always at least one
    pub qty: u32,
}

impl CartLineItem {
    /// Snapshot a product into a new line item.
    pub fn from_product(product: &Product, qty: u32) -> Self {
        Self {
            slug: product.slug.clone(),
            name: product.name.clone(),
            price: product.price_minor(),
            image: product.image.clone(),
            qty,
        }
    }

    /// Price of this line (`price * qty`) in minor units.
    pub fn line_total(&self) -> i64 {
        pricing::line_total(self.price, self.qty)
    }
}

/// The persisted cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartDocument {
    items: Vec<CartLineItem>,
}

impl CartDocument {
    /// Create an empty cart document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a persisted cart document.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] if the payload is not a cart document, or
    /// if its line items break the one-line-per-slug or positive-quantity rules.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: Self = serde_json::from_str(json)?;
        let mut seen = FxHashSet::default();

        for item in &document.items {
            if item.qty == 0 {
                return Err(DocumentError::ZeroQuantity(item.slug.clone()));
            }

            if item.price < 0 {
                return Err(DocumentError::NegativePrice(item.slug.clone()));
            }

            if !seen.insert(item.slug.as_str()) {
                return Err(DocumentError::DuplicateSlug(item.slug.clone()));
            }
        }

        Ok(document)
    }

    /// Encode the document as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Line items in first-added order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Find the line item for a slug.
    pub fn line(&self, slug: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.slug == slug)
    }

    /// Current quantity for a slug, zero when absent.
    pub fn qty(&self, slug: &str) -> u32 {
        self.line(slug).map_or(0, |item| item.qty)
    }

    /// Add `qty` units of a product.
    ///
    /// An existing line keeps its snapshot and has its quantity increased;
    /// otherwise a new line is appended. Adding zero units does nothing.
    /// Returns whether the document changed.
    pub fn add(&mut self, product: &Product, qty: u32) -> bool {
        if qty == 0 {
            return false;
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.slug == product.slug) {
            item.qty = item.qty.saturating_add(qty);
        } else {
            self.items.push(CartLineItem::from_product(product, qty));
        }

        true
    }

    /// Overwrite the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line. Slugs without a line are
    /// ignored. Returns whether the document changed.
    pub fn set_qty(&mut self, slug: &str, qty: i64) -> bool {
        let Some(idx) = self.items.iter().position(|item| item.slug == slug) else {
            return false;
        };

        if qty <= 0 {
            self.items.remove(idx);
        } else if let Some(item) = self.items.get_mut(idx) {
            item.qty = u32::try_from(qty).unwrap_or(u32::MAX);
        }

        true
    }

    /// Remove every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.qty)).sum()
    }

    /// Sum of `price * qty` across all lines, in minor units.
    pub fn total_price(&self) -> i64 {
        pricing::total_price(&self.items)
    }

    /// Get the number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
