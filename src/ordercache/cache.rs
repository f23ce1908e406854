//! Core OrderCache implementation: shared state, validity flag and the
//! memoized matching-size query.

use super::index::SecurityIndex;
use super::matching::matched_quantity;
use super::order::Order;
use super::store::{OrderStore, PairingState};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{trace, warn};

/// Validity of the memoized matching sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheValidity {
    /// Memoized sizes reflect the current orders
    #[default]
    Clean,
    /// A mutation happened since the last matching pass
    Dirty,
}

/// Everything guarded by the cache lock.
#[derive(Debug)]
pub(crate) struct CacheState {
    pub(super) name: String,
    pub(super) store: OrderStore,
    pub(super) index: SecurityIndex,
    pub(super) matching_sizes: HashMap<String, u64>,
    pub(super) validity: CacheValidity,
}

impl CacheState {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            store: OrderStore::new(),
            index: SecurityIndex::new(),
            matching_sizes: HashMap::new(),
            validity: CacheValidity::Clean,
        }
    }

    pub(super) fn mark_dirty(&mut self) {
        self.validity = CacheValidity::Dirty;
    }

    /// Runs the matching pass if any mutation happened since the last one
    /// and drops the memoized sizes. Returns `true` when a pass ran.
    pub(super) fn refresh(&mut self) -> bool {
        if self.validity == CacheValidity::Clean {
            return false;
        }
        let _ = self.run_matching_pass();
        self.matching_sizes.clear();
        self.validity = CacheValidity::Clean;
        true
    }

    /// Memoized matched quantity of a security, computing it on a miss.
    pub(super) fn matching_size(&mut self, security_id: &str) -> u64 {
        if let Some(&size) = self.matching_sizes.get(security_id) {
            return size;
        }
        let Some(bucket) = self.index.bucket(security_id) else {
            return 0;
        };
        let size = matched_quantity(bucket);
        self.matching_sizes.insert(security_id.to_string(), size);
        size
    }
}

/// An in-memory cache of outstanding orders that reports, per security, the
/// quantity that would cross between opposite-side orders of different
/// companies.
///
/// Every operation runs inside a single critical section, so adds, cancels
/// and queries appear atomic to concurrent callers. Mutations only mark the
/// cache dirty; the matching pass runs lazily on the next size query and
/// its per-security results are memoized until the next mutation.
///
/// # Examples
///
/// ```
/// use ordercache_rs::{Order, OrderCache, Side};
///
/// let cache = OrderCache::new();
/// cache.add_order(Order::new("OrdId1", "SecId1", Side::Sell, 500, "User1", "CompanyA"));
/// cache.add_order(Order::new("OrdId2", "SecId1", Side::Buy, 300, "User2", "CompanyB"));
///
/// assert_eq!(cache.matching_size_for_security("SecId1"), 300);
/// assert_eq!(cache.matching_size_for_security("NoSuchSec"), 0);
/// ```
#[derive(Debug)]
pub struct OrderCache {
    name: String,
    state: Mutex<CacheState>,
}

impl OrderCache {
    /// Create an empty cache named `"default"`.
    pub fn new() -> Self {
        Self::with_name("default")
    }

    /// Create an empty cache. The name only labels log output.
    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            state: Mutex::new(CacheState::new(name)),
        }
    }

    /// Name of this cache.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Acquires the cache lock.
    ///
    /// A poisoned lock is taken over: the state is marked dirty and the
    /// memoized sizes are dropped, so the next query reconciles the index
    /// against the store and recomputes.
    pub(super) fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!(
                "Order cache {}: lock poisoned by a panicking thread, recovering",
                self.name
            );
            self.state.clear_poison();
            let mut state = poisoned.into_inner();
            state.matching_sizes.clear();
            state.mark_dirty();
            state
        })
    }

    /// Returns the total quantity that can match for `security_id`.
    ///
    /// When any order was added or cancelled since the previous query, the
    /// matching pass runs first over every unpaired order. The size of each
    /// security is then computed once and served from memory until the next
    /// mutation. Unknown securities yield `0`.
    pub fn matching_size_for_security(&self, security_id: &str) -> u64 {
        let mut state = self.lock();
        if state.refresh() {
            trace!("Order cache {}: matching sizes recomputed", self.name);
        }
        let size = state.matching_size(security_id);
        trace!(
            "Order cache {}: matching size for {} is {}",
            self.name, security_id, size
        );
        size
    }

    /// Current validity of the memoized sizes.
    #[must_use]
    pub fn validity(&self) -> CacheValidity {
        self.lock().validity
    }

    /// Number of live orders.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.lock().store.len()
    }

    /// Returns `true` when the cache holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().store.is_empty()
    }

    /// Returns the pairing state of an order, `None` when the id is unknown.
    ///
    /// The state reflects the last matching pass; orders added since then
    /// are still unpaired.
    #[must_use]
    pub fn pairing_state(&self, order_id: &str) -> Option<PairingState> {
        self.lock().store.pairing(order_id)
    }

    /// Returns `Some(true)` when the order has been absorbed by a larger
    /// order, `None` when the id is unknown.
    #[must_use]
    pub fn is_paired(&self, order_id: &str) -> Option<bool> {
        self.pairing_state(order_id).map(PairingState::is_paired)
    }

    /// Securities that currently have indexed orders, in id order.
    ///
    /// Securities whose orders were all cancelled drop out after the next
    /// size query.
    #[must_use]
    pub fn securities(&self) -> Vec<String> {
        self.lock().index.security_ids()
    }

    /// Orders absorbed by `order_id` during matching, in absorption order.
    ///
    /// Empty when the order absorbed nothing or is unknown.
    #[must_use]
    pub fn absorbed_by(&self, order_id: &str) -> Vec<Order> {
        let state = self.lock();
        let Some(order) = state.store.get(order_id) else {
            return Vec::new();
        };
        state
            .index
            .bucket(order.security_id())
            .and_then(|bucket| {
                bucket
                    .entries()
                    .find(|entry| entry.order() == order)
                    .map(|entry| entry.absorbed().to_vec())
            })
            .unwrap_or_default()
    }
}

impl Default for OrderCache {
    fn default() -> Self {
        Self::new()
    }
}
