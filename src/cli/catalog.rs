use std::io;

use cisko::{cart::CartStore, storage::CartStorage};
use clap::Args;

use super::render;

#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Only list products whose name or description contains this text
    #[arg(short, long, default_value = "")]
    search: String,
}

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product slug
    slug: String,
}

pub(crate) fn list<S: CartStorage>(
    out: &mut impl io::Write,
    store: &CartStore<'_, S>,
    args: &CatalogArgs,
) -> io::Result<()> {
    let catalog = store.catalog();

    render::write_products(out, &catalog.search(&args.search), catalog.currency())?;
    render::write_badge(out, store)
}

pub(crate) fn show<S: CartStorage>(
    out: &mut impl io::Write,
    store: &CartStore<'_, S>,
    args: &ProductArgs,
) -> io::Result<()> {
    match store.catalog().find(&args.slug) {
        Some(product) => render::write_product(out, product)?,
        None => writeln!(out, "Product not found: {}", args.slug)?,
    }

    render::write_badge(out, store)
}
