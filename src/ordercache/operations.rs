//! Order cache operations: adding, cancelling and listing orders

use super::cache::OrderCache;
use super::mass_cancel::CancelResult;
use super::order::Order;
use super::store::PairingState;
use tracing::trace;

impl OrderCache {
    /// Add an order to the cache.
    ///
    /// An order with an id already present replaces the previous one (last
    /// write wins) and starts unpaired. The replaced order leaves the index
    /// immediately; orders it had absorbed become unpaired again.
    pub fn add_order(&self, order: Order) {
        let mut state = self.lock();
        trace!(
            "Order cache {}: Adding order {} ({} {} x {})",
            self.name(),
            order.order_id(),
            order.side(),
            order.security_id(),
            order.quantity()
        );

        let mut released = Vec::new();
        if let Some(previous) = state.store.insert(order.clone()) {
            trace!(
                "Order cache {}: Order {} replaced",
                self.name(),
                previous.order_id()
            );
            released.extend(state.index.remove(&previous).unwrap_or_default());
        }
        released.extend(state.index.insert(order));
        for absorbed in &released {
            if state.store.is_live(absorbed) {
                state
                    .store
                    .set_pairing(absorbed.order_id(), PairingState::Unpaired);
            }
        }

        state.mark_dirty();
    }

    /// Cancel the order with this id.
    ///
    /// Unknown ids are a no-op. The security index is pruned lazily on the
    /// next size query.
    pub fn cancel_order(&self, order_id: &str) -> CancelResult {
        let mut state = self.lock();
        trace!("Order cache {}: Cancelling order {}", self.name(), order_id);

        let removed = state.store.remove(order_id);
        state.mark_dirty();
        CancelResult::from_orders(removed.into_iter().collect())
    }

    /// Snapshot of all live orders. The order of the returned orders is
    /// unspecified.
    #[must_use]
    pub fn all_orders(&self) -> Vec<Order> {
        self.lock().store.all_orders()
    }

    /// Returns the live order with this id.
    #[must_use]
    pub fn get_order(&self, order_id: &str) -> Option<Order> {
        self.lock().store.get(order_id).cloned()
    }
}
