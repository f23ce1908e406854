//! Mass cancel operations for bulk order removal.
//!
//! Cancels every order of a user, or every order of a security at or above a
//! minimum quantity. Like single-order cancellation, these operations only
//! touch the order store and mark the cache dirty; the security index is
//! pruned on the next size query.

use super::cache::OrderCache;
use super::order::Order;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Result of a cancel operation.
///
/// Contains the count and identifiers of the orders that were removed.
/// Cancelling unknown ids, users or securities yields an empty result.
///
/// # Examples
///
/// ```
/// use ordercache_rs::CancelResult;
///
/// let result = CancelResult::default();
/// assert_eq!(result.cancelled_count(), 0);
/// assert!(result.cancelled_order_ids().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResult {
    cancelled_count: usize,
    cancelled_order_ids: Vec<String>,
}

impl CancelResult {
    pub(crate) fn from_orders(orders: Vec<Order>) -> Self {
        let mut cancelled_order_ids: Vec<String> = orders
            .into_iter()
            .map(|order| order.order_id().to_string())
            .collect();
        cancelled_order_ids.sort();
        Self {
            cancelled_count: cancelled_order_ids.len(),
            cancelled_order_ids,
        }
    }

    /// Returns the number of orders cancelled.
    #[must_use]
    #[inline]
    pub fn cancelled_count(&self) -> usize {
        self.cancelled_count
    }

    /// Returns the ids of all cancelled orders, sorted.
    #[must_use]
    #[inline]
    pub fn cancelled_order_ids(&self) -> &[String] {
        &self.cancelled_order_ids
    }

    /// Returns `true` if no orders were cancelled.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cancelled_count == 0
    }
}

impl std::fmt::Display for CancelResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CancelResult {{ cancelled: {} }}", self.cancelled_count)
    }
}

impl OrderCache {
    /// Cancel all orders placed by `user`, compared ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordercache_rs::{Order, OrderCache, Side};
    ///
    /// let cache = OrderCache::new();
    /// cache.add_order(Order::new("OrdId1", "SecId1", Side::Buy, 100, "User1", "CompanyA"));
    /// cache.add_order(Order::new("OrdId2", "SecId2", Side::Sell, 200, "User1", "CompanyA"));
    /// cache.add_order(Order::new("OrdId3", "SecId1", Side::Sell, 300, "User2", "CompanyB"));
    ///
    /// let result = cache.cancel_orders_for_user("user1");
    /// assert_eq!(result.cancelled_count(), 2);
    /// assert_eq!(cache.order_count(), 1);
    /// ```
    pub fn cancel_orders_for_user(&self, user: &str) -> CancelResult {
        let mut state = self.lock();
        trace!(
            "Order cache {}: Mass cancel orders for user {}",
            self.name(),
            user
        );

        let removed = state
            .store
            .remove_where(|order| order.user().eq_ignore_ascii_case(user));
        state.mark_dirty();
        CancelResult::from_orders(removed)
    }

    /// Cancel all orders of `security_id` whose quantity is at least
    /// `min_qty`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordercache_rs::{Order, OrderCache, Side};
    ///
    /// let cache = OrderCache::new();
    /// cache.add_order(Order::new("OrdId1", "SecId1", Side::Buy, 999, "User1", "CompanyA"));
    /// cache.add_order(Order::new("OrdId2", "SecId1", Side::Sell, 1000, "User2", "CompanyB"));
    /// cache.add_order(Order::new("OrdId3", "SecId2", Side::Sell, 5000, "User3", "CompanyC"));
    ///
    /// let result = cache.cancel_orders_for_security_with_minimum_qty("SecId1", 1000);
    /// assert_eq!(result.cancelled_order_ids(), ["OrdId2".to_string()]);
    /// ```
    pub fn cancel_orders_for_security_with_minimum_qty(
        &self,
        security_id: &str,
        min_qty: u64,
    ) -> CancelResult {
        let mut state = self.lock();
        trace!(
            "Order cache {}: Mass cancel orders for security {} with quantity >= {}",
            self.name(),
            security_id,
            min_qty
        );

        let removed = state.store.remove_where(|order| {
            order.security_id() == security_id && order.quantity() >= min_qty
        });
        state.mark_dirty();
        CancelResult::from_orders(removed)
    }
}
