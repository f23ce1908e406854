// demos/src/bin/matching_sizes.rs
//
// Loads each bundled sample order set into a fresh cache and logs the
// matching size of every security, together with which orders each
// absorber paired with.
//
// Run this demo with:
//   cargo run --bin matching_sizes
//   (from the demos directory)

use ordercache_rs::{Order, OrderCache, samples, setup_logger};
use tracing::info;

fn main() {
    setup_logger();
    info!("Matching Sizes Demo");

    let sets: [(&str, Vec<Order>); 3] = [
        ("specific sample", samples::specific_sample_orders()),
        ("example 2", samples::orders_example_2()),
        ("example 3", samples::orders_example_3()),
    ];

    for (label, orders) in sets {
        let cache = OrderCache::with_name(label);
        for order in orders {
            cache.add_order(order);
        }
        report(&cache);
    }
}

fn report(cache: &OrderCache) {
    info!("--- {} ({} orders) ---", cache.name(), cache.order_count());

    for security_id in ["SecId1", "SecId2", "SecId3"] {
        let size = cache.matching_size_for_security(security_id);
        info!("  {}: matching size {}", security_id, size);
    }

    let mut orders = cache.all_orders();
    orders.sort_by(|a, b| a.order_id().cmp(b.order_id()));
    for order in &orders {
        let absorbed = cache.absorbed_by(order.order_id());
        if absorbed.is_empty() {
            continue;
        }
        let ids: Vec<&str> = absorbed.iter().map(Order::order_id).collect();
        info!(
            "  {} {} {} ({}) absorbed {:?}",
            order.order_id(),
            order.side(),
            order.quantity(),
            order.company(),
            ids
        );
    }
}
