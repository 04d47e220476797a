//! Integration tests for cart behaviour against the built-in catalog.

use testresult::TestResult;

use cisko::prelude::*;

#[test]
fn repeated_adds_then_set_quantity() -> TestResult {
    let catalog = Catalog::cisko()?;
    let mut store = CartStore::open(&catalog, MemoryStorage::new());

    store.add_item("tee-noir-logo", 1);
    store.add_item("tee-noir-logo", 2);

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.line("tee-noir-logo").map(|l| l.qty), Some(3));

    store.set_qty("tee-noir-logo", 5);

    assert_eq!(store.total_price(), 5 * 2499);
    assert_eq!(store.total_price(), 12495);

    Ok(())
}

#[test]
fn remove_one_of_two_products() -> TestResult {
    let catalog = Catalog::cisko()?;
    let mut store = CartStore::open(&catalog, MemoryStorage::new());

    store.add_item("bonnet", 1);
    store.add_item("tote-bag", 1);
    store.remove_item("bonnet");

    assert_eq!(store.total_quantity(), 1);
    assert_eq!(store.total_price(), 1499);

    Ok(())
}

#[test]
fn adds_of_same_slug_sum_quantities() -> TestResult {
    let catalog = Catalog::cisko()?;
    let mut store = CartStore::open(&catalog, MemoryStorage::new());
    let amounts = [1, 4, 2, 7, 1];

    for qty in amounts {
        store.add_item("hoodie-zip", qty);
    }

    let matching = store
        .items()
        .iter()
        .filter(|line| line.slug == "hoodie-zip")
        .count();

    assert_eq!(matching, 1);
    assert_eq!(
        store.line("hoodie-zip").map(|l| l.qty),
        Some(amounts.iter().sum())
    );

    Ok(())
}

#[test]
fn total_price_matches_line_sum_after_mixed_operations() -> TestResult {
    let catalog = Catalog::cisko()?;
    let mut store = CartStore::open(&catalog, MemoryStorage::new());

    store.add_item("sweat-crew", 3);
    store.add_item("casquette-classique", 2);
    store.increment("casquette-classique");
    store.decrement("sweat-crew");
    store.add_item("bonnet", 1);
    store.set_qty("bonnet", 4);
    store.decrement("unknown");

    let expected: i64 = store
        .items()
        .iter()
        .map(|line| line.price * i64::from(line.qty))
        .sum();

    assert_eq!(store.total_price(), expected);
    assert_eq!(store.total_price(), 2 * 4499 + 3 * 1999 + 4 * 1699);

    Ok(())
}

#[test]
fn clear_then_totals_are_zero() -> TestResult {
    let catalog = Catalog::cisko()?;
    let mut store = CartStore::open(&catalog, MemoryStorage::new());

    store.add_item("bonnet", 2);
    store.clear();

    assert_eq!(store.total_quantity(), 0);
    assert!(store.items().is_empty());

    Ok(())
}

#[test]
fn corrupt_or_missing_state_loads_empty() -> TestResult {
    let catalog = Catalog::cisko()?;

    for payload in ["", "garbage", r#"{"items":"nope"}"#, r#"{"cart":[]}"#] {
        let store = CartStore::open(&catalog, MemoryStorage::with_entry(CART_KEY, payload));

        assert!(store.load().is_empty(), "payload {payload:?} should load empty");
        assert!(store.is_empty(), "payload {payload:?} should open empty");
    }

    let store = CartStore::open(&catalog, MemoryStorage::new());

    assert!(store.load().is_empty());

    Ok(())
}

#[test]
fn unknown_slug_leaves_document_unchanged() -> TestResult {
    let catalog = Catalog::cisko()?;
    let mut store = CartStore::open(&catalog, MemoryStorage::new());

    store.add_item("tote-bag", 2);

    let before = store.document().clone();

    store.add_item("not-a-product", 3);

    assert_eq!(store.document(), &before);

    Ok(())
}

#[test]
fn file_storage_persists_across_stores() -> TestResult {
    let dir = tempfile::tempdir()?;
    let catalog = Catalog::cisko()?;

    {
        let mut store = CartStore::open(&catalog, FileStorage::new(dir.path()));

        store.add_item("bonnet", 2);
        store.add_item("tote-bag", 1);
    }

    let store = CartStore::open(&catalog, FileStorage::new(dir.path()));

    let slugs: Vec<&str> = store.items().iter().map(|l| l.slug.as_str()).collect();

    assert_eq!(slugs, ["bonnet", "tote-bag"]);
    assert_eq!(store.total_price(), 2 * 1699 + 1499);

    Ok(())
}

#[test]
fn last_writer_wins_between_stores() -> TestResult {
    let dir = tempfile::tempdir()?;
    let catalog = Catalog::cisko()?;

    let mut first = CartStore::open(&catalog, FileStorage::new(dir.path()));
    let mut second = CartStore::open(&catalog, FileStorage::new(dir.path()));

    first.add_item("bonnet", 1);
    second.add_item("tote-bag", 1);

    first.reload();

    assert!(first.line("bonnet").is_none());
    assert!(first.line("tote-bag").is_some());

    Ok(())
}

#[test]
fn custom_keys_keep_carts_apart() -> TestResult {
    let dir = tempfile::tempdir()?;
    let catalog = Catalog::cisko()?;

    let mut current = CartStore::open(&catalog, FileStorage::new(dir.path()));

    current.add_item("bonnet", 1);

    let next = CartStore::with_key(&catalog, FileStorage::new(dir.path()), "cisko_cart_v2");

    assert!(next.is_empty());

    Ok(())
}
