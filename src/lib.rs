//! Cisko
//!
//! Storefront core for the Cisko shop: a static product catalog, a persisted
//! shopping cart and an e-mail checkout handoff.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod storage;
