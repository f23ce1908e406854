//! Order cache error types

use thiserror::Error;

/// Errors raised while building orders for the cache.
///
/// The cache operations themselves never fail: unknown ids, users and
/// securities resolve to no-ops or zero results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OrderCacheError {
    /// The side text is neither buy nor sell
    #[error("invalid side: {value:?} is neither Buy nor Sell")]
    InvalidSide {
        /// The rejected input
        value: String,
    },

    /// A required identifier is empty
    #[error("missing field: {field} must not be empty")]
    MissingField {
        /// Name of the empty field
        field: &'static str,
    },
}
