//! Products

use rusty_money::{Money, iso::Currency};

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Catalog-internal identifier
    pub id: u32,

    /// Stable identifier used by the cart to reference the product
    pub slug: String,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Product price
    pub price: Money<'static, Currency>,

    /// Image URL
    pub image: String,

    /// Units in stock. Informational only.
    pub stock: u32,
}

impl Product {
    /// Returns the price in minor units (e.g. cents).
    pub fn price_minor(&self) -> i64 {
        self.price.to_minor_units()
    }

    /// Check whether the name or description contains the given needle.
    ///
    /// The needle is expected to already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
