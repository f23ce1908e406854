use super::generate_orders;
use criterion::{BenchmarkId, Criterion};
use ordercache_rs::OrderCache;
use std::hint::black_box;

fn loaded_cache(count: usize) -> OrderCache {
    let cache = OrderCache::with_name("BENCH");
    for order in generate_orders(count, 10) {
        cache.add_order(order);
    }
    let _ = cache.matching_size_for_security("SecId0");
    cache
}

/// Register all benchmarks for mass cancel operations.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderCache - Mass Cancel");

    for &order_count in &[100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("cancel_orders_for_user", order_count),
            &order_count,
            |b, &count| {
                b.iter_with_setup(
                    || loaded_cache(count),
                    |cache| {
                        let result = black_box(cache.cancel_orders_for_user("User3"));
                        assert_eq!(result.cancelled_count(), count / 10);
                    },
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("cancel_orders_for_security_with_minimum_qty", order_count),
            &order_count,
            |b, &count| {
                b.iter_with_setup(
                    || loaded_cache(count),
                    |cache| black_box(cache.cancel_orders_for_security_with_minimum_qty("SecId1", 5_000)),
                );
            },
        );

        // Cancel then re-query: lazy pruning plus a fresh matching pass
        group.bench_with_input(
            BenchmarkId::new("cancel_then_query", order_count),
            &order_count,
            |b, &count| {
                b.iter_with_setup(
                    || loaded_cache(count),
                    |cache| {
                        let _ = cache.cancel_orders_for_user("User3");
                        black_box(cache.matching_size_for_security("SecId3"))
                    },
                );
            },
        );
    }

    group.finish();
}
