//! Integration tests for adding, cancelling and querying orders.

use ordercache_rs::prelude::*;

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

fn loaded(orders: Vec<Order>) -> OrderCache {
    let cache = OrderCache::with_name("TEST");
    for order in orders {
        cache.add_order(order);
    }
    cache
}

fn order(id: &str, security: &str, side: Side, qty: u64, company: &str) -> Order {
    Order::new(id, security, side, qty, "User", company)
}

// ---------------------------------------------------------------------------
// add / list
// ---------------------------------------------------------------------------

#[test]
fn new_cache_is_empty() {
    let cache = OrderCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.order_count(), 0);
    assert!(cache.all_orders().is_empty());
    assert_eq!(cache.matching_size_for_security("SecId1"), 0);
}

#[test]
fn added_orders_are_listed() {
    let cache = loaded(samples::specific_sample_orders());
    assert_eq!(cache.order_count(), 8);

    let mut ids: Vec<String> = cache
        .all_orders()
        .iter()
        .map(|o| o.order_id().to_string())
        .collect();
    ids.sort();
    let expected: Vec<String> = (1..=8).map(|i| format!("OrdId{i}")).collect();
    assert_eq!(ids, expected);
}

#[test]
fn get_order_returns_stored_value() {
    let cache = loaded(samples::specific_sample_orders());
    let found = cache.get_order("OrdId4").expect("order present");
    assert_eq!(found.security_id(), "SecId2");
    assert_eq!(found.side(), Side::Buy);
    assert_eq!(found.quantity(), 600);
    assert_eq!(found.company(), "CompanyC");
    assert!(cache.get_order("OrdId42").is_none());
}

#[test]
fn adding_same_id_replaces_order() {
    let cache = OrderCache::new();
    cache.add_order(order("A", "S", Side::Buy, 100, "X"));
    cache.add_order(order("A", "S", Side::Sell, 300, "Y"));

    assert_eq!(cache.order_count(), 1);
    let stored = cache.get_order("A").expect("order present");
    assert_eq!(stored.side(), Side::Sell);
    assert_eq!(stored.quantity(), 300);
}

// ---------------------------------------------------------------------------
// matching size
// ---------------------------------------------------------------------------

#[test]
fn sample_sizes() {
    let cache = loaded(samples::specific_sample_orders());
    assert_eq!(cache.matching_size_for_security("SecId1"), 0);
    assert_eq!(cache.matching_size_for_security("SecId2"), 2700);
    assert_eq!(cache.matching_size_for_security("SecId3"), 0);
}

#[test]
fn example_2_sizes() {
    let cache = loaded(samples::orders_example_2());
    assert_eq!(cache.matching_size_for_security("SecId1"), 300);
    assert_eq!(cache.matching_size_for_security("SecId2"), 1000);
    assert_eq!(cache.matching_size_for_security("SecId3"), 600);
}

#[test]
fn example_3_sizes() {
    let cache = loaded(samples::orders_example_3());
    assert_eq!(cache.matching_size_for_security("SecId1"), 900);
    assert_eq!(cache.matching_size_for_security("SecId2"), 600);
    assert_eq!(cache.matching_size_for_security("SecId3"), 0);
}

#[test]
fn unknown_security_is_zero() {
    let cache = loaded(samples::orders_example_2());
    assert_eq!(cache.matching_size_for_security("SecId404"), 0);
    assert_eq!(cache.matching_size_for_security(""), 0);
}

#[test]
fn same_company_orders_never_cross() {
    let cache = loaded(vec![
        order("1", "S", Side::Buy, 500, "Acme"),
        order("2", "S", Side::Sell, 1000, "ACME"),
        order("3", "S", Side::Buy, 200, "acme"),
    ]);
    assert_eq!(cache.matching_size_for_security("S"), 0);
}

#[test]
fn equal_quantities_do_not_absorb_each_other() {
    let cache = loaded(vec![
        order("1", "S", Side::Buy, 500, "X"),
        order("2", "S", Side::Sell, 500, "Y"),
    ]);
    assert_eq!(cache.matching_size_for_security("S"), 0);
}

#[test]
fn smaller_opposite_order_is_absorbed() {
    let cache = loaded(vec![
        order("1", "S", Side::Buy, 400, "X"),
        order("2", "S", Side::Sell, 500, "Y"),
    ]);
    assert_eq!(cache.matching_size_for_security("S"), 400);
    assert_eq!(cache.is_paired("1"), Some(true));
    assert_eq!(cache.pairing_state("2"), Some(PairingState::Unpaired));
}

#[test]
fn query_marks_cache_clean_and_mutation_marks_dirty() {
    let cache = loaded(samples::orders_example_3());
    assert_eq!(cache.validity(), CacheValidity::Dirty);

    let _ = cache.matching_size_for_security("SecId1");
    assert_eq!(cache.validity(), CacheValidity::Clean);

    cache.add_order(order("new", "SecId9", Side::Buy, 1, "Z"));
    assert_eq!(cache.validity(), CacheValidity::Dirty);
}

// ---------------------------------------------------------------------------
// cancel_order
// ---------------------------------------------------------------------------

#[test]
fn cancel_order_removes_it() {
    let cache = loaded(samples::specific_sample_orders());
    let result = cache.cancel_order("OrdId1");

    assert_eq!(result.cancelled_count(), 1);
    assert_eq!(result.cancelled_order_ids(), ["OrdId1".to_string()]);
    assert!(cache.get_order("OrdId1").is_none());
    assert_eq!(cache.order_count(), 7);
}

#[test]
fn cancel_order_is_idempotent() {
    let cache = loaded(samples::specific_sample_orders());
    assert_eq!(cache.cancel_order("OrdId1").cancelled_count(), 1);
    assert!(cache.cancel_order("OrdId1").is_empty());
    assert_eq!(cache.order_count(), 7);
}

#[test]
fn cancel_absorber_releases_its_orders() {
    let cache = loaded(vec![
        order("big", "S", Side::Sell, 1000, "X"),
        order("small", "S", Side::Buy, 300, "Y"),
    ]);
    assert_eq!(cache.matching_size_for_security("S"), 300);

    let _ = cache.cancel_order("big");
    assert_eq!(cache.matching_size_for_security("S"), 0);
    assert_eq!(cache.is_paired("small"), Some(false));

    cache.add_order(order("bigger", "S", Side::Sell, 2000, "Z"));
    assert_eq!(cache.matching_size_for_security("S"), 300);
}

#[test]
fn name_is_kept() {
    let cache = OrderCache::with_name("DESK-1");
    assert_eq!(cache.name(), "DESK-1");
}
