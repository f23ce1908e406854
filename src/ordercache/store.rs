//! Canonical store of live orders and their pairing state.

use super::order::Order;
use std::collections::HashMap;

/// Pairing state of a live order.
///
/// An order starts `Unpaired` and becomes `Paired` once a larger
/// opposite-side order of another company absorbs it. The state entry is
/// dropped together with the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingState {
    /// Not yet counted against any larger order
    #[default]
    Unpaired,
    /// Absorbed by a larger opposite-side order
    Paired,
}

impl PairingState {
    /// Returns `true` for [`PairingState::Paired`].
    #[must_use]
    #[inline]
    pub fn is_paired(self) -> bool {
        self == PairingState::Paired
    }
}

#[derive(Debug, Clone)]
struct StoredOrder {
    order: Order,
    pairing: PairingState,
}

/// Live orders keyed by order id.
#[derive(Debug, Default)]
pub(crate) struct OrderStore {
    orders: HashMap<String, StoredOrder>,
}

impl OrderStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Inserts the order as `Unpaired`, replacing any order with the same id.
    /// Returns the replaced order.
    pub(crate) fn insert(&mut self, order: Order) -> Option<Order> {
        self.orders
            .insert(
                order.order_id().to_string(),
                StoredOrder {
                    order,
                    pairing: PairingState::Unpaired,
                },
            )
            .map(|previous| previous.order)
    }

    /// Removes the order with this id. Absent ids are a no-op.
    pub(crate) fn remove(&mut self, order_id: &str) -> Option<Order> {
        self.orders.remove(order_id).map(|stored| stored.order)
    }

    /// Removes every order matching `predicate` and returns them.
    pub(crate) fn remove_where<F>(&mut self, mut predicate: F) -> Vec<Order>
    where
        F: FnMut(&Order) -> bool,
    {
        let mut removed = Vec::new();
        self.orders.retain(|_, stored| {
            if predicate(&stored.order) {
                removed.push(stored.order.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Snapshot of all live orders. No ordering is guaranteed.
    pub(crate) fn all_orders(&self) -> Vec<Order> {
        self.orders.values().map(|stored| stored.order.clone()).collect()
    }

    pub(crate) fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id).map(|stored| &stored.order)
    }

    /// Returns `true` when `order` is live exactly as given, i.e. its id is
    /// present and has not been replaced by a different order.
    pub(crate) fn is_live(&self, order: &Order) -> bool {
        self.get(order.order_id()) == Some(order)
    }

    pub(crate) fn pairing(&self, order_id: &str) -> Option<PairingState> {
        self.orders.get(order_id).map(|stored| stored.pairing)
    }

    pub(crate) fn is_unpaired(&self, order_id: &str) -> bool {
        self.pairing(order_id) == Some(PairingState::Unpaired)
    }

    pub(crate) fn set_pairing(&mut self, order_id: &str, pairing: PairingState) {
        if let Some(stored) = self.orders.get_mut(order_id) {
            stored.pairing = pairing;
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.orders.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
