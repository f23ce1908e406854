mod order_cache_tests;
mod property_tests;
