use criterion::{criterion_group, criterion_main};


use order_cache::register_benchmarks as register_order_cache_benchmarks;

criterion_group!(benches, register_order_cache_benchmarks);

criterion_main!(benches);
