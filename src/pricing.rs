//! Pricing
//!
//! All arithmetic happens on integer minor units; `Money` is only used for display.

use rusty_money::{Money, iso::Currency};

use crate::cart::CartLineItem;

/// Price of `qty` units at `price` minor units each.
pub fn line_total(price: i64, qty: u32) -> i64 {
    price.saturating_mul(i64::from(qty))
}

/// Sum of `price * qty` across the given line items, in minor units.
pub fn total_price<'a>(items: impl IntoIterator<Item = &'a CartLineItem>) -> i64 {
    items
        .into_iter()
        .fold(0_i64, |acc, item| acc.saturating_add(item.line_total()))
}

/// Wrap an amount of minor units as `Money` for display.
pub fn money(minor_units: i64, currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_minor(minor_units, currency)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::EUR;

    use super::*;

    fn line(price: i64, qty: u32) -> CartLineItem {
        CartLineItem {
            slug: format!("item-{price}"),
            name: String::new(),
            price,
            image: String::new(),
            qty,
        }
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        assert_eq!(line_total(2499, 5), 12495);
    }

    #[test]
    fn total_price_sums_line_totals() {
        let items = [line(1699, 1), line(1499, 3)];

        assert_eq!(total_price(&items), 1699 + 3 * 1499);
    }

    #[test]
    fn total_price_of_nothing_is_zero() {
        let items: [CartLineItem; 0] = [];

        assert_eq!(total_price(&items), 0);
    }

    #[test]
    fn money_wraps_minor_units() {
        assert_eq!(money(1999, EUR), Money::from_minor(1999, EUR));
    }
}
