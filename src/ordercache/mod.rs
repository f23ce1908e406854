//! OrderCache implementation for tracking live orders and computing the
//! matchable quantity per security.

pub mod cache;
pub mod error;
mod index;
/// Bulk cancellation by user and by security/minimum quantity.
pub mod mass_cancel;
pub mod matching;
/// Adding, cancelling and listing orders.
pub mod operations;
pub mod order;
/// Sample order sets used by the demos and tests.
pub mod samples;
mod store;

pub use cache::{CacheValidity, OrderCache};
pub use error::OrderCacheError;
pub use index::{BucketEntry, SecurityBucket};
pub use mass_cancel::CancelResult;
pub use matching::{MatchTally, matched_quantity};
pub use order::{Order, Side};
pub use store::PairingState;
