use std::io;

use cisko::{cart::CartStore, storage::CartStorage};
use clap::Args;

use super::render;

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Product slug
    slug: String,

    /// Number of units to add
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    qty: u32,
}

#[derive(Debug, Args)]
pub(crate) struct SetArgs {
    /// Product slug
    slug: String,

    /// New quantity; zero or less removes the line
    #[arg(allow_negative_numbers = true)]
    qty: i64,
}

#[derive(Debug, Args)]
pub(crate) struct SlugArgs {
    /// Product slug
    slug: String,
}

pub(crate) fn add<S: CartStorage>(
    out: &mut impl io::Write,
    store: &mut CartStore<'_, S>,
    args: &AddArgs,
) -> io::Result<()> {
    if !store.add_item(&args.slug, args.qty) {
        writeln!(out, "Product not found: {}", args.slug)?;
    }

    render::write_badge(out, store)
}

pub(crate) fn set<S: CartStorage>(
    out: &mut impl io::Write,
    store: &mut CartStore<'_, S>,
    args: &SetArgs,
) -> io::Result<()> {
    store.set_qty(&args.slug, args.qty);

    render::write_cart(out, store)
}

pub(crate) fn increment<S: CartStorage>(
    out: &mut impl io::Write,
    store: &mut CartStore<'_, S>,
    args: &SlugArgs,
) -> io::Result<()> {
    store.increment(&args.slug);

    render::write_cart(out, store)
}

pub(crate) fn decrement<S: CartStorage>(
    out: &mut impl io::Write,
    store: &mut CartStore<'_, S>,
    args: &SlugArgs,
) -> io::Result<()> {
    store.decrement(&args.slug);

    render::write_cart(out, store)
}

pub(crate) fn remove<S: CartStorage>(
    out: &mut impl io::Write,
    store: &mut CartStore<'_, S>,
    args: &SlugArgs,
) -> io::Result<()> {
    store.remove_item(&args.slug);

    render::write_cart(out, store)
}

pub(crate) fn clear<S: CartStorage>(
    out: &mut impl io::Write,
    store: &mut CartStore<'_, S>,
) -> io::Result<()> {
    store.clear();

    render::write_cart(out, store)
}
