//! Cart Store
//!
//! Owns the cart document for a storage key and persists it after every
//! mutation. None of the operations fail: storage errors and corrupt payloads
//! are logged and degrade to an empty or unchanged cart, and unknown slugs
//! are ignored.

use rusty_money::{Money, iso::Currency};
use tracing::{debug, warn};

use crate::{
    cart::{CartDocument, CartLineItem},
    catalog::Catalog,
    pricing,
    storage::CartStorage,
};

/// Storage key for the current cart document schema.
pub const CART_KEY: &str = "cisko_cart_v1";

/// Cart Store
#[derive(Debug)]
pub struct CartStore<'c, S: CartStorage> {
    catalog: &'c Catalog,
    storage: S,
    key: String,
    document: CartDocument,
}

impl<'c, S: CartStorage> CartStore<'c, S> {
    /// Open the cart stored under [`CART_KEY`].
    pub fn open(catalog: &'c Catalog, storage: S) -> Self {
        Self::with_key(catalog, storage, CART_KEY)
    }

    /// Open the cart stored under a custom key.
    pub fn with_key(catalog: &'c Catalog, storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            catalog,
            storage,
            key: key.into(),
            document: CartDocument::new(),
        };

        store.document = store.load();

        store
    }

    /// Read the persisted document.
    ///
    /// Missing, unreadable or malformed state yields an empty document.
    pub fn load(&self) -> CartDocument {
        let payload = match self.storage.read(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return CartDocument::new(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "cart storage unavailable; using empty cart");

                return CartDocument::new();
            }
        };

        CartDocument::from_json(&payload).unwrap_or_else(|err| {
            warn!(key = %self.key, error = %err, "discarding malformed cart document");

            CartDocument::new()
        })
    }

    /// Replace the current document and persist it.
    pub fn save(&mut self, document: CartDocument) {
        self.document = document;
        self.persist();
    }

    /// Re-read the persisted document, picking up writes made elsewhere.
    pub fn reload(&mut self) {
        self.document = self.load();
    }

    /// Add `qty` units of the product with the given slug.
    ///
    /// Unknown slugs and zero quantities are ignored. Returns whether the cart changed.
    pub fn add_item(&mut self, slug: &str, qty: u32) -> bool {
        let Some(product) = self.catalog.find(slug) else {
            debug!(slug, "ignoring unknown product");

            return false;
        };

        let changed = self.document.add(product, qty);

        if changed {
            self.persist();
        }

        changed
    }

    /// Overwrite the quantity of the line for `slug`.
    ///
    /// A quantity of zero or less removes the line; slugs not in the cart are
    /// ignored. Returns whether the cart changed.
    pub fn set_qty(&mut self, slug: &str, qty: i64) -> bool {
        let changed = self.document.set_qty(slug, qty);

        if changed {
            self.persist();
        } else {
            debug!(slug, qty, "ignoring quantity change for product not in cart");
        }

        changed
    }

    /// Increase the quantity of the line for `slug` by one.
    pub fn increment(&mut self, slug: &str) -> bool {
        let current = i64::from(self.document.qty(slug));

        self.set_qty(slug, current + 1)
    }

    /// Decrease the quantity of the line for `slug` by one, removing it at zero.
    pub fn decrement(&mut self, slug: &str) -> bool {
        let current = i64::from(self.document.qty(slug));

        self.set_qty(slug, current - 1)
    }

    /// Remove the line for `slug`.
    pub fn remove_item(&mut self, slug: &str) -> bool {
        self.set_qty(slug, 0)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.document.clear();
        self.persist();
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.document.total_quantity()
    }

    /// Sum of `price * qty` across all lines, in minor units.
    pub fn total_price(&self) -> i64 {
        self.document.total_price()
    }

    /// Total price as `Money` in the catalog currency.
    pub fn total(&self) -> Money<'static, Currency> {
        pricing::money(self.total_price(), self.catalog.currency())
    }

    /// Line items in first-added order.
    pub fn items(&self) -> &[CartLineItem] {
        self.document.items()
    }

    /// Find the line item for a slug.
    pub fn line(&self, slug: &str) -> Option<&CartLineItem> {
        self.document.line(slug)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// The current document.
    pub fn document(&self) -> &CartDocument {
        &self.document
    }

    /// The catalog used to resolve slugs.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Storage key of this cart.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the underlying storage.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consume the store, returning the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let payload = match self.document.to_json() {
            Ok(payload) => payload,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to encode cart document");

                return;
            }
        };

        if let Err(err) = self.storage.write(&self.key, &payload) {
            warn!(key = %self.key, error = %err, "failed to persist cart document");
        }
    }
}
