//! Cisko prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CART_KEY, CartDocument, CartLineItem, CartStore, DocumentError},
    catalog::{Catalog, CatalogError},
    checkout::{Checkout, CheckoutError, ContactDetails, MailDraft, MailSink, MailtoWriter},
    config::{ConfigError, LogFormat, StorefrontConfig},
    products::Product,
    storage::{CartStorage, FileStorage, MemoryStorage, StorageError},
};
