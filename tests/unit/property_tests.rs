//! Property-based tests for the matching size invariants.

use ordercache_rs::{Order, OrderCache, Side};
use proptest::prelude::*;

const SECURITIES: [&str; 3] = ["SecA", "SecB", "SecC"];

fn order_strategy() -> impl Strategy<Value = (usize, bool, u64, usize, usize)> {
    (0..SECURITIES.len(), any::<bool>(), 1u64..5_000, 0..4usize, 0..4usize)
}

fn build(rows: &[(usize, bool, u64, usize, usize)]) -> OrderCache {
    let cache = OrderCache::new();
    for (i, &(security, buy, qty, user, company)) in rows.iter().enumerate() {
        let side = if buy { Side::Buy } else { Side::Sell };
        cache.add_order(Order::new(
            format!("O{i}"),
            SECURITIES[security],
            side,
            qty,
            format!("User{user}"),
            format!("Company{company}"),
        ));
    }
    cache
}

fn side_totals(cache: &OrderCache, security_id: &str) -> (u64, u64) {
    cache
        .all_orders()
        .iter()
        .filter(|o| o.security_id() == security_id)
        .fold((0, 0), |(buy, sell), o| match o.side() {
            Side::Buy => (buy + o.quantity(), sell),
            Side::Sell => (buy, sell + o.quantity()),
        })
}

proptest! {
    /// The matched quantity never exceeds the smaller side's live total
    #[test]
    fn matching_size_is_bounded_by_each_side(
        rows in prop::collection::vec(order_strategy(), 0..60)
    ) {
        let cache = build(&rows);
        for security_id in SECURITIES {
            let size = cache.matching_size_for_security(security_id);
            let (buy, sell) = side_totals(&cache, security_id);
            prop_assert!(size <= buy.min(sell), "{} > min({}, {})", size, buy, sell);
        }
    }

    /// Orders of a single company never produce a matched quantity
    #[test]
    fn single_company_matches_nothing(
        rows in prop::collection::vec(order_strategy(), 0..40)
    ) {
        let single: Vec<_> = rows
            .into_iter()
            .map(|(security, buy, qty, user, _)| (security, buy, qty, user, 0))
            .collect();
        let cache = build(&single);
        for security_id in SECURITIES {
            prop_assert_eq!(cache.matching_size_for_security(security_id), 0);
        }
    }

    /// Querying twice without a mutation returns the same value
    #[test]
    fn repeated_query_is_stable(
        rows in prop::collection::vec(order_strategy(), 0..60)
    ) {
        let cache = build(&rows);
        for security_id in SECURITIES {
            let first = cache.matching_size_for_security(security_id);
            prop_assert_eq!(cache.matching_size_for_security(security_id), first);
        }
    }

    /// Cancelling an unknown id changes neither the orders nor the sizes
    #[test]
    fn unknown_cancel_changes_nothing(
        rows in prop::collection::vec(order_strategy(), 0..60)
    ) {
        let cache = build(&rows);
        let before: Vec<u64> = SECURITIES
            .iter()
            .map(|s| cache.matching_size_for_security(s))
            .collect();

        let result = cache.cancel_order("missing");
        prop_assert!(result.is_empty());
        prop_assert_eq!(cache.order_count(), rows.len());

        let after: Vec<u64> = SECURITIES
            .iter()
            .map(|s| cache.matching_size_for_security(s))
            .collect();
        prop_assert_eq!(before, after);
    }

    /// After a minimum-quantity cancel no remaining order of that security
    /// reaches the threshold
    #[test]
    fn min_qty_cancel_removes_every_large_order(
        rows in prop::collection::vec(order_strategy(), 0..60),
        threshold in 1u64..5_000
    ) {
        let cache = build(&rows);
        let _ = cache.matching_size_for_security("SecA");
        let _ = cache.cancel_orders_for_security_with_minimum_qty("SecA", threshold);

        prop_assert!(cache
            .all_orders()
            .iter()
            .filter(|o| o.security_id() == "SecA")
            .all(|o| o.quantity() < threshold));
        let (buy, sell) = side_totals(&cache, "SecA");
        prop_assert!(cache.matching_size_for_security("SecA") <= buy.min(sell));
    }
}
