//! Integration tests for the checkout handoff.

use testresult::TestResult;

use cisko::prelude::*;

fn contact() -> ContactDetails {
    ContactDetails {
        name: "Ada Martin".to_string(),
        email: "ada@example.test".to_string(),
        address: "12 rue des Lilas".to_string(),
        zip: "75011".to_string(),
        city: "Paris".to_string(),
    }
}

#[test]
fn empty_cart_checkout_is_refused() -> TestResult {
    let catalog = Catalog::cisko()?;
    let store = CartStore::open(&catalog, MemoryStorage::new());
    let checkout = StorefrontConfig::default().checkout(&catalog);
    let mut sink = MailtoWriter::new(Vec::new());

    let result = checkout.submit(store.document(), &contact(), &mut sink);

    assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    assert!(sink.into_inner().is_empty(), "no handoff should occur");

    Ok(())
}

#[test]
fn checkout_summary_reflects_cart_snapshot() -> TestResult {
    let catalog = Catalog::cisko()?;
    let mut store = CartStore::open(&catalog, MemoryStorage::new());
    let checkout = Checkout::new("CISKO", "orders@example.test", catalog.currency());

    store.add_item("bonnet", 1);
    store.add_item("tote-bag", 2);

    let mut sink = MailtoWriter::new(Vec::new());
    let draft = checkout.submit(store.document(), &contact(), &mut sink)?;

    assert_eq!(draft.recipient, "orders@example.test");
    assert_eq!(draft.subject, "CISKO order");
    assert!(draft.body.contains("Customer: Ada Martin"));
    assert!(draft.body.contains("Address: 12 rue des Lilas, 75011 Paris"));
    assert!(draft.body.contains(&format!(
        "- Tote Bag x2 = {}",
        cisko::pricing::money(2998, catalog.currency())
    )));
    assert!(draft.body.contains(&format!("Total: {}", store.total())));

    let written = String::from_utf8(sink.into_inner())?;

    assert_eq!(written.trim_end(), draft.mailto_uri());

    Ok(())
}

#[test]
fn checkout_does_not_modify_cart() -> TestResult {
    let catalog = Catalog::cisko()?;
    let mut store = CartStore::open(&catalog, MemoryStorage::new());
    let checkout = StorefrontConfig::default().checkout(&catalog);

    store.add_item("hoodie-zip", 1);

    let before = store.document().clone();

    checkout.submit(store.document(), &contact(), &mut MailtoWriter::new(Vec::new()))?;

    assert_eq!(store.document(), &before);

    Ok(())
}
