use std::{io, path::PathBuf};

use anyhow::Context;
use cisko::{
    cart::CartStore,
    config::{LogFormat, StorefrontConfig},
};
use clap::{Parser, Subcommand};

mod cart;
mod catalog;
mod checkout;
mod logging;
mod render;

#[derive(Debug, Parser)]
#[command(name = "cisko", about = "Cisko storefront", long_about = None)]
pub(crate) struct Cli {
    /// Configuration file
    #[arg(long, env = "CISKO_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Directory holding the persisted cart
    #[arg(long, env = "CISKO_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Catalog file; defaults to the built-in catalog
    #[arg(long, env = "CISKO_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products, optionally filtered by a search query
    Catalog(catalog::CatalogArgs),
    /// Show a single product
    Product(catalog::ProductArgs),
    /// Show the cart
    Cart,
    /// Add a product to the cart
    Add(cart::AddArgs),
    /// Set the quantity of a cart line
    Set(cart::SetArgs),
    /// Increase the quantity of a cart line by one
    Inc(cart::SlugArgs),
    /// Decrease the quantity of a cart line by one
    Dec(cart::SlugArgs),
    /// Remove a line from the cart
    Remove(cart::SlugArgs),
    /// Empty the cart
    Clear,
    /// Hand the order off as an e-mail
    Checkout(checkout::CheckoutArgs),
}

impl Cli {
    pub(crate) fn run(self) -> anyhow::Result<()> {
        let config = self.load_config()?;

        logging::init_subscriber(&config).context("failed to initialise logging")?;

        let catalog = config.catalog().context("failed to load catalog")?;
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let mut store = CartStore::with_key(&catalog, config.storage(), &config.storage_key);

        match self.command {
            Commands::Catalog(args) => catalog::list(&mut out, &store, &args)?,
            Commands::Product(args) => catalog::show(&mut out, &store, &args)?,
            Commands::Cart => render::write_cart(&mut out, &store)?,
            Commands::Add(args) => cart::add(&mut out, &mut store, &args)?,
            Commands::Set(args) => cart::set(&mut out, &mut store, &args)?,
            Commands::Inc(args) => cart::increment(&mut out, &mut store, &args)?,
            Commands::Dec(args) => cart::decrement(&mut out, &mut store, &args)?,
            Commands::Remove(args) => cart::remove(&mut out, &mut store, &args)?,
            Commands::Clear => cart::clear(&mut out, &mut store)?,
            Commands::Checkout(args) => {
                checkout::run(&mut out, &store, &config.checkout(&catalog), args)?;
            }
        }

        Ok(())
    }

    fn load_config(&self) -> anyhow::Result<StorefrontConfig> {
        let mut config = match &self.config {
            Some(path) => StorefrontConfig::from_path(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => StorefrontConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.data_dir.clone_from(data_dir);
        }

        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }

        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }

        Ok(config)
    }
}
