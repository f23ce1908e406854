//! # In-Memory Order Cache
//!
//! A thread-safe cache of outstanding trade orders that reports, for each
//! security, the quantity that would cross if opposite-side orders from
//! different companies were paired off.
//!
//! ## Key Features
//!
//! - **Order Store**: live orders keyed by order id, each with a pairing
//!   state (`Unpaired` → `Paired`).
//!
//! - **Security Index**: per security, orders ordered by quantity ascending
//!   (order id breaks ties), each carrying the smaller opposite-side orders it
//!   has absorbed.
//!
//! - **Matching Engine**: every unpaired order absorbs the unpaired,
//!   strictly smaller, opposite-side orders of other companies; the bucket is
//!   then folded through a crossing accumulator into a single matched
//!   quantity.
//!
//! - **Lazy, memoized queries**: adds and cancels only mark the cache dirty.
//!   The next size query reconciles the index, runs one matching pass and
//!   memoizes each security's size until the next mutation.
//!
//! ## Concurrency
//!
//! All operations on an [`OrderCache`] are serialized by one mutex. The
//! matching pass reads and updates the store, the index, the pairing states
//! and the memoized sizes together, so it must never observe a half-applied
//! add or cancel. Share a cache between threads with `Arc<OrderCache>`.
//!
//! ## Matching size
//!
//! The matching size is an aggregate statistic computed from quantities
//! only. There are no prices, no executions and no fills ledger.
//!
//! ## Example
//!
//! ```
//! use ordercache_rs::prelude::*;
//!
//! let cache = OrderCache::new();
//! for order in samples::specific_sample_orders() {
//!     cache.add_order(order);
//! }
//!
//! assert_eq!(cache.matching_size_for_security("SecId1"), 0);
//! assert_eq!(cache.matching_size_for_security("SecId2"), 2700);
//! assert_eq!(cache.matching_size_for_security("SecId3"), 0);
//!
//! let _ = cache.cancel_orders_for_user("User8");
//! assert_eq!(cache.matching_size_for_security("SecId2"), 2600);
//! ```

pub mod ordercache;

pub mod prelude;
mod utils;

pub use ordercache::samples;
pub use ordercache::{
    BucketEntry, CacheValidity, CancelResult, MatchTally, Order, OrderCache, OrderCacheError,
    PairingState, SecurityBucket, Side, matched_quantity,
};
pub use utils::setup_logger;
