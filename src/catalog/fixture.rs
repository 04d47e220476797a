//! Catalog Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{catalog::CatalogError, products::Product};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products, in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Catalog-internal identifier
    pub id: u32,

    /// Product slug
    pub slug: String,

    /// Product name
    pub name: String,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Product price (e.g., "24.99 EUR")
    pub price: String,

    /// Image URL
    #[serde(default)]
    pub image: String,

    /// Units in stock
    #[serde(default)]
    pub stock: u32,
}

impl TryFrom<ProductFixture> for Product {
    type Error = CatalogError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product {
            id: fixture.id,
            slug: fixture.slug,
            name: fixture.name,
            description: fixture.description,
            price: Money::from_minor(minor_units, currency),
            image: fixture.image,
            stock: fixture.stock,
        })
    }
}

/// Parse price string (e.g., "24.99 EUR") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a decimal number, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), CatalogError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| CatalogError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "EUR" => EUR,
        "GBP" => GBP,
        "USD" => USD,
        other => return Err(CatalogError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
