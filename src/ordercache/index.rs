//! Per-security ordered index of live orders.
//!
//! Each security owns a [`SecurityBucket`]: its orders ordered by quantity
//! ascending, each entry carrying the opposite-side orders it has absorbed.
//! Orders of equal quantity are ordered by order id ascending, so the bucket
//! ordering is total and deterministic.
//!
//! Cancellation does not touch the index. Stale keys and stale absorbed
//! references are pruned by [`SecurityIndex::reconcile`] before each matching
//! pass.

use super::order::Order;
use std::collections::BTreeMap;

/// Bucket ordering key: quantity first, order id as tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct OrderKey {
    quantity: u64,
    order_id: String,
}

impl OrderKey {
    pub(crate) fn of(order: &Order) -> Self {
        Self {
            quantity: order.quantity(),
            order_id: order.order_id().to_string(),
        }
    }

    /// Smallest key of the given quantity. The empty id sorts first.
    fn floor(quantity: u64) -> Self {
        Self {
            quantity,
            order_id: String::new(),
        }
    }
}

/// A bucket key together with the orders it has absorbed.
#[derive(Debug, Clone)]
pub struct BucketEntry {
    order: Order,
    absorbed: Vec<Order>,
}

impl BucketEntry {
    fn new(order: Order) -> Self {
        Self {
            order,
            absorbed: Vec::new(),
        }
    }

    /// The order this entry is keyed by.
    #[must_use]
    #[inline]
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Orders counted against this entry's order, in absorption order.
    #[must_use]
    #[inline]
    pub fn absorbed(&self) -> &[Order] {
        &self.absorbed
    }
}

/// Orders of one security ordered by quantity.
#[derive(Debug, Default)]
pub struct SecurityBucket {
    entries: BTreeMap<OrderKey, BucketEntry>,
}

impl SecurityBucket {
    /// Entries in ascending quantity order.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &BucketEntry> {
        self.entries.values()
    }

    /// Entries whose quantity is strictly below `quantity`, ascending.
    pub fn head_strictly_smaller(&self, quantity: u64) -> impl Iterator<Item = &BucketEntry> {
        self.entries
            .range(..OrderKey::floor(quantity))
            .map(|(_, entry)| entry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What a reconciliation pass removed.
#[derive(Debug, Default)]
pub(crate) struct Reconciliation {
    /// Stale bucket keys dropped
    pub(crate) pruned_keys: usize,
    /// Stale absorbed references dropped
    pub(crate) pruned_references: usize,
    /// Live orders that were absorbed by a pruned key and must be unpaired
    pub(crate) released: Vec<Order>,
}

/// Index of security buckets keyed by security id.
#[derive(Debug, Default)]
pub(crate) struct SecurityIndex {
    buckets: BTreeMap<String, SecurityBucket>,
}

impl SecurityIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket for a security, creating an empty one if absent.
    pub(crate) fn ensure_bucket(&mut self, security_id: &str) -> &mut SecurityBucket {
        self.buckets.entry(security_id.to_string()).or_default()
    }

    pub(crate) fn bucket(&self, security_id: &str) -> Option<&SecurityBucket> {
        self.buckets.get(security_id)
    }

    /// Places the order at its quantity rank with an empty absorbed list.
    ///
    /// If the same key was already present its absorbed orders are returned
    /// so the caller can unpair them.
    pub(crate) fn insert(&mut self, order: Order) -> Vec<Order> {
        let key = OrderKey::of(&order);
        self.ensure_bucket(order.security_id())
            .entries
            .insert(key, BucketEntry::new(order))
            .map(|displaced| displaced.absorbed)
            .unwrap_or_default()
    }

    /// Removes the key for `order` eagerly, returning its absorbed orders.
    pub(crate) fn remove(&mut self, order: &Order) -> Option<Vec<Order>> {
        let bucket = self.buckets.get_mut(order.security_id())?;
        let removed = bucket.entries.remove(&OrderKey::of(order));
        if bucket.is_empty() {
            self.buckets.remove(order.security_id());
        }
        removed.map(|entry| entry.absorbed)
    }

    /// Drops every key and absorbed reference for which `is_live` is false.
    ///
    /// Absorbed orders of a dropped key that are themselves still live are
    /// reported in [`Reconciliation::released`]. Buckets left empty are
    /// removed.
    pub(crate) fn reconcile<F>(&mut self, is_live: F) -> Reconciliation
    where
        F: Fn(&Order) -> bool,
    {
        let mut outcome = Reconciliation::default();

        for bucket in self.buckets.values_mut() {
            bucket.entries.retain(|_, entry| {
                let before = entry.absorbed.len();
                entry.absorbed.retain(|absorbed| is_live(absorbed));
                outcome.pruned_references += before - entry.absorbed.len();

                if is_live(&entry.order) {
                    true
                } else {
                    outcome.pruned_keys += 1;
                    outcome.released.append(&mut entry.absorbed);
                    false
                }
            });
        }
        self.buckets.retain(|_, bucket| !bucket.is_empty());

        outcome
    }

    /// Entries of `order`'s security strictly smaller than `order`.
    pub(crate) fn head_strictly_smaller<'a>(
        &'a self,
        security_id: &str,
        order: &Order,
    ) -> impl Iterator<Item = &'a BucketEntry> + 'a {
        let quantity = order.quantity();
        self.buckets
            .get(security_id)
            .into_iter()
            .flat_map(move |bucket| bucket.head_strictly_smaller(quantity))
    }

    /// Appends `absorbed` to the absorbed list of `absorber`'s entry.
    /// Returns `false` when `absorber` is not indexed.
    pub(crate) fn push_absorbed(&mut self, absorber: &Order, absorbed: Order) -> bool {
        match self
            .buckets
            .get_mut(absorber.security_id())
            .and_then(|bucket| bucket.entries.get_mut(&OrderKey::of(absorber)))
        {
            Some(entry) => {
                entry.absorbed.push(absorbed);
                true
            }
            None => false,
        }
    }

    /// Orders of one security from largest to smallest key.
    pub(crate) fn orders_descending(&self, security_id: &str) -> Vec<Order> {
        self.buckets
            .get(security_id)
            .map(|bucket| {
                bucket
                    .entries()
                    .rev()
                    .map(|entry| entry.order.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn security_ids(&self) -> Vec<String> {
        self.buckets.keys().cloned().collect()
    }
}
