// demos/src/bin/cancel_scenarios.rs
//
// Walks through the cancel operations on the specific sample order set:
// cancelling by user, by security with a minimum quantity, and by order id,
// logging the matching sizes after each step. Cancel results are also
// printed as JSON.
//
// Run this demo with:
//   cargo run --bin cancel_scenarios
//   (from the demos directory)

use ordercache_rs::prelude::*;
use tracing::{info, warn};

const SECURITIES: [&str; 3] = ["SecId1", "SecId2", "SecId3"];

fn main() {
    setup_logger();
    info!("Cancel Scenarios Demo");

    let cache = sample_cache("cancel-by-user");
    log_sizes(&cache, "initial");
    for user in ["User5", "User1", "User3"] {
        let result = cache.cancel_orders_for_user(user);
        log_result(&format!("cancel user {user}"), &result);
    }
    log_sizes(&cache, "after cancelling User5, User1, User3");

    let cache = sample_cache("cancel-by-min-qty");
    log_sizes(&cache, "initial");
    let result = cache.cancel_orders_for_security_with_minimum_qty("SecId2", 1000);
    log_result("cancel SecId2 qty >= 1000", &result);
    log_sizes(&cache, "after minimum-quantity cancel");

    cache.add_order(Order::new("OrdId9", "SecId2", Side::Sell, 700, "User9", "CompanyF"));
    log_sizes(&cache, "after adding Sell 700 from CompanyF");

    let cache = sample_cache("cancel-by-id");
    let result = cache.cancel_order("OrdId8");
    log_result("cancel OrdId8", &result);
    let result = cache.cancel_order("OrdId8");
    log_result("cancel OrdId8 again", &result);
    log_sizes(&cache, "after cancelling OrdId8");
}

fn sample_cache(name: &str) -> OrderCache {
    let cache = OrderCache::with_name(name);
    for order in samples::specific_sample_orders() {
        cache.add_order(order);
    }
    cache
}

fn log_sizes(cache: &OrderCache, stage: &str) {
    let sizes: Vec<u64> = SECURITIES
        .iter()
        .map(|security_id| cache.matching_size_for_security(security_id))
        .collect();
    info!("[{}] {}: sizes {:?}", cache.name(), stage, sizes);
}

fn log_result(action: &str, result: &CancelResult) {
    match serde_json::to_string(result) {
        Ok(json) => info!("{}: {} {}", action, result, json),
        Err(e) => warn!("{}: {} (could not serialize: {})", action, result, e),
    }
}
