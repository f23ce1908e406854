//! Contains the matching engine logic for the order cache.
//!
//! Matching is quantity-only. An unpaired order absorbs every unpaired
//! opposite-side order of another company whose quantity is strictly
//! smaller, marking each of them paired. The matched quantity of a security
//! is then obtained by folding the bucket, flattened into
//! `[key, absorbed...]` runs, through a crossing accumulator.

use super::cache::CacheState;
use super::index::SecurityBucket;
use super::order::{Order, Side};
use super::store::PairingState;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Running counters of the crossing accumulator.
///
/// Quantity floats on the side with an excess until the opposite side
/// consumes it; `matched` is the total quantity ever crossed.
///
/// # Examples
///
/// ```
/// use ordercache_rs::{MatchTally, Order, Side};
///
/// let mut tally = MatchTally::default();
/// tally.apply(&Order::new("1", "S", Side::Sell, 300, "u1", "A"));
/// tally.apply(&Order::new("2", "S", Side::Buy, 200, "u2", "B"));
/// assert_eq!(tally.matched(), 200);
/// assert_eq!(tally.remaining_sell(), 100);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    matched: u64,
    remaining_buy: u64,
    remaining_sell: u64,
}

impl MatchTally {
    /// Folds one order into the accumulator.
    ///
    /// Every counter saturates at `u64::MAX` instead of overflowing.
    pub fn apply(&mut self, order: &Order) {
        let quantity = order.quantity();
        match order.side() {
            Side::Buy => {
                let crossed = self.remaining_sell.min(quantity);
                self.matched = self.matched.saturating_add(crossed);
                self.remaining_sell -= crossed;
                self.remaining_buy = self.remaining_buy.saturating_add(quantity - crossed);
            }
            Side::Sell => {
                let crossed = self.remaining_buy.min(quantity);
                self.matched = self.matched.saturating_add(crossed);
                self.remaining_buy -= crossed;
                self.remaining_sell = self.remaining_sell.saturating_add(quantity - crossed);
            }
        }
    }

    /// Total quantity crossed so far.
    #[must_use]
    #[inline]
    pub fn matched(&self) -> u64 {
        self.matched
    }

    /// Buy quantity still waiting for a sell.
    #[must_use]
    #[inline]
    pub fn remaining_buy(&self) -> u64 {
        self.remaining_buy
    }

    /// Sell quantity still waiting for a buy.
    #[must_use]
    #[inline]
    pub fn remaining_sell(&self) -> u64 {
        self.remaining_sell
    }
}

/// Computes the matched quantity of a security bucket.
///
/// Leading entries that absorbed nothing are skipped. The remaining entries
/// are flattened into their own order followed by their absorbed orders,
/// each order id counted once, and folded through a [`MatchTally`].
#[must_use]
pub fn matched_quantity(bucket: &SecurityBucket) -> u64 {
    let mut seen: HashSet<&str> = HashSet::new();

    bucket
        .entries()
        .skip_while(|entry| entry.absorbed().is_empty())
        .flat_map(|entry| std::iter::once(entry.order()).chain(entry.absorbed()))
        .filter(|&order| seen.insert(order.order_id()))
        .fold(MatchTally::default(), |mut tally, order| {
            tally.apply(order);
            tally
        })
        .matched()
}

/// Outcome of one matching pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PassSummary {
    pub(crate) absorbers: usize,
    pub(crate) absorbed: usize,
    pub(crate) pruned_keys: usize,
    pub(crate) pruned_references: usize,
    pub(crate) released: usize,
}

impl CacheState {
    /// Runs a full matching pass over every unpaired order.
    ///
    /// The index is reconciled against the store first. Securities are
    /// visited in id order and each bucket from its largest key down, so the
    /// pass is deterministic.
    pub(crate) fn run_matching_pass(&mut self) -> PassSummary {
        let mut summary = PassSummary::default();

        let store = &self.store;
        let reconciliation = self.index.reconcile(|order| store.is_live(order));
        summary.pruned_keys = reconciliation.pruned_keys;
        summary.pruned_references = reconciliation.pruned_references;
        summary.released = reconciliation.released.len();
        for released in &reconciliation.released {
            self.store
                .set_pairing(released.order_id(), PairingState::Unpaired);
        }

        for security_id in self.index.security_ids() {
            for order in self.index.orders_descending(&security_id) {
                // Earlier absorbers in this pass may have paired it already.
                if !self.store.is_unpaired(order.order_id()) {
                    continue;
                }
                let absorbed = self.absorb(&order);
                if absorbed > 0 {
                    summary.absorbers += 1;
                    summary.absorbed += absorbed;
                }
            }
        }

        debug!(
            "Order cache {}: matching pass absorbed {} orders into {} keys (pruned {} keys, {} references, released {})",
            self.name,
            summary.absorbed,
            summary.absorbers,
            summary.pruned_keys,
            summary.pruned_references,
            summary.released
        );
        summary
    }

    /// Absorbs every unpaired, strictly smaller, opposite-side order of a
    /// different company into `order`'s bucket entry and marks it paired.
    ///
    /// Returns the number of orders absorbed. The bucket must already be
    /// reconciled.
    pub(crate) fn absorb(&mut self, order: &Order) -> usize {
        let wanted = order.side().opposite();
        let candidates: Vec<Order> = self
            .index
            .head_strictly_smaller(order.security_id(), order)
            .map(|entry| entry.order())
            .filter(|candidate| candidate.side() == wanted && !candidate.same_company(order))
            .filter(|candidate| self.store.is_unpaired(candidate.order_id()))
            .cloned()
            .collect();

        let mut absorbed = 0;
        for candidate in candidates {
            let candidate_id = candidate.order_id().to_string();
            if self.index.push_absorbed(order, candidate) {
                self.store.set_pairing(&candidate_id, PairingState::Paired);
                absorbed += 1;
            }
        }

        if absorbed > 0 {
            trace!(
                "Order cache {}: {} {} absorbed {} orders",
                self.name,
                order.side(),
                order.order_id(),
                absorbed
            );
        }
        absorbed
    }
}
