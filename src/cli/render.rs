//! Table rendering for catalog and cart views.

use std::io;

use cisko::{
    cart::{CartLineItem, CartStore},
    pricing,
    products::Product,
    storage::CartStorage,
};
use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

pub(crate) fn write_products(
    out: &mut impl io::Write,
    products: &[&Product],
    currency: &'static Currency,
) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "No products found.");
    }

    let mut builder = Builder::default();

    builder.push_record(["Slug", "Name", "Price", "Stock"]);

    for product in products {
        builder.push_record([
            product.slug.clone(),
            product.name.clone(),
            pricing::money(product.price_minor(), currency).to_string(),
            product.stock.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..4), Alignment::right());

    writeln!(out, "{table}")
}

pub(crate) fn write_product(out: &mut impl io::Write, product: &Product) -> io::Result<()> {
    writeln!(out, "{}", product.name)?;
    writeln!(out, "{}", product.price)?;
    writeln!(out)?;

    if !product.description.is_empty() {
        writeln!(out, "{}", product.description)?;
        writeln!(out)?;
    }

    writeln!(out, "Slug:  {}", product.slug)?;
    writeln!(out, "Stock: {}", product.stock)?;
    writeln!(out, "Image: {}", product.image)
}

pub(crate) fn write_cart<S: CartStorage>(
    out: &mut impl io::Write,
    store: &CartStore<'_, S>,
) -> io::Result<()> {
    let currency = store.catalog().currency();

    if store.is_empty() {
        writeln!(out, "Your cart is empty.")?;
    } else {
        writeln!(out, "{}", cart_table(store.items(), currency))?;
    }

    writeln!(out, "Total: {}", store.total())
}

pub(crate) fn write_badge<S: CartStorage>(
    out: &mut impl io::Write,
    store: &CartStore<'_, S>,
) -> io::Result<()> {
    writeln!(out, "Cart: {}", store.total_quantity())
}

fn cart_table(items: &[CartLineItem], currency: &'static Currency) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Slug", "Item", "Unit Price", "Qty", "Line Total"]);

    for item in items {
        builder.push_record([
            item.slug.clone(),
            item.name.clone(),
            pricing::money(item.price, currency).to_string(),
            item.qty.to_string(),
            pricing::money(item.line_total(), currency).to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    table.to_string()
}

#[cfg(test)]
mod tests {
    use cisko::{catalog::Catalog, storage::MemoryStorage};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn empty_cart_renders_notice_and_zero_total() -> TestResult {
        let catalog = Catalog::cisko()?;
        let store = CartStore::open(&catalog, MemoryStorage::new());
        let mut out = Vec::new();

        write_cart(&mut out, &store)?;

        let text = String::from_utf8(out)?;

        assert!(text.starts_with("Your cart is empty.\n"));
        assert!(text.ends_with(&format!("Total: {}\n", store.total())));

        Ok(())
    }

    #[test]
    fn cart_table_lists_each_line() -> TestResult {
        let catalog = Catalog::cisko()?;
        let mut store = CartStore::open(&catalog, MemoryStorage::new());

        store.add_item("bonnet", 2);
        store.add_item("tote-bag", 1);

        let mut out = Vec::new();

        write_cart(&mut out, &store)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Bonnet"));
        assert!(text.contains("Tote Bag"));
        assert!(text.contains(&pricing::money(3398, catalog.currency()).to_string()));

        Ok(())
    }

    #[test]
    fn no_products_renders_notice() -> TestResult {
        let catalog = Catalog::cisko()?;
        let mut out = Vec::new();

        write_products(&mut out, &[], catalog.currency())?;

        assert_eq!(String::from_utf8(out)?, "No products found.\n");

        Ok(())
    }
}
