// demos/src/bin/concurrent_churn.rs
//
// Shares one cache between writer threads that add and cancel orders and a
// reader thread that keeps querying matching sizes. Once every thread has
// finished, the final sizes are logged.
//
// Run this demo with:
//   cargo run --bin concurrent_churn
//   (from the demos directory)

use ordercache_rs::{Order, OrderCache, Side, setup_logger};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{error, info};

const WRITERS: usize = 4;
const ORDERS_PER_WRITER: usize = 5_000;
const SECURITIES: [&str; 4] = ["SecId1", "SecId2", "SecId3", "SecId4"];

fn main() {
    setup_logger();
    info!("Concurrent Churn Demo");

    let cache = Arc::new(OrderCache::with_name("churn"));
    let start = Instant::now();

    let mut handles = Vec::with_capacity(WRITERS + 1);
    for writer in 0..WRITERS {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || write_orders(&cache, writer)));
    }
    {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            let mut queries = 0usize;
            for _ in 0..500 {
                for security_id in SECURITIES {
                    let _ = cache.matching_size_for_security(security_id);
                    queries += 1;
                }
            }
            info!("Reader finished after {} queries", queries);
        }));
    }

    for handle in handles {
        if handle.join().is_err() {
            error!("A worker thread panicked");
        }
    }

    info!(
        "Finished in {:?} with {} live orders",
        start.elapsed(),
        cache.order_count()
    );
    for security_id in SECURITIES {
        info!(
            "  {}: matching size {}",
            security_id,
            cache.matching_size_for_security(security_id)
        );
    }
}

fn write_orders(cache: &OrderCache, writer: usize) {
    for i in 0..ORDERS_PER_WRITER {
        let side = if (i + writer) % 2 == 0 {
            Side::Buy
        } else {
            Side::Sell
        };
        cache.add_order(Order::new(
            format!("W{writer}-{i}"),
            SECURITIES[i % SECURITIES.len()],
            side,
            100 + ((i * 31 + writer * 17) % 2_000) as u64,
            format!("User{}", i % 8),
            format!("Company{}", (i + writer) % 3),
        ));

        if i % 5 == 4 {
            let _ = cache.cancel_order(&format!("W{writer}-{}", i - 2));
        }
        if i % 1_000 == 999 {
            let result = cache.cancel_orders_for_user(&format!("User{}", writer % 8));
            info!("Writer {} cancelled {} orders", writer, result.cancelled_count());
        }
    }
}
