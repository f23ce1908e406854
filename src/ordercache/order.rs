//! Order value type and trade side.

use super::error::OrderCacheError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Returns the side an order of this side pairs against.
    #[must_use]
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
        }
    }
}

impl FromStr for Side {
    type Err = OrderCacheError;

    /// Parses a side ignoring ASCII case, so `"buy"`, `"Buy"` and `"BUY"`
    /// are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("buy") {
            Ok(Side::Buy)
        } else if trimmed.eq_ignore_ascii_case("sell") {
            Ok(Side::Sell)
        } else {
            Err(OrderCacheError::InvalidSide {
                value: s.to_string(),
            })
        }
    }
}

impl<'de> Deserialize<'de> for Side {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// An immutable outstanding order.
///
/// Identity for indexing purposes is the `order_id`; two orders with the same
/// id are the same order, and adding one replaces the other in the cache.
///
/// # Examples
///
/// ```
/// use ordercache_rs::{Order, Side};
///
/// let order = Order::try_new("OrdId1", "SecId1", "buy", 1000, "User1", "CompanyA").unwrap();
/// assert_eq!(order.side(), Side::Buy);
/// assert_eq!(order.quantity(), 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    order_id: String,
    security_id: String,
    side: Side,
    #[serde(rename = "qty")]
    quantity: u64,
    user: String,
    company: String,
}

impl Order {
    /// Creates a new order.
    pub fn new(
        order_id: impl Into<String>,
        security_id: impl Into<String>,
        side: Side,
        quantity: u64,
        user: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            security_id: security_id.into(),
            side,
            quantity,
            user: user.into(),
            company: company.into(),
        }
    }

    /// Creates a new order from raw driver input, parsing `side` ignoring case.
    ///
    /// # Errors
    /// Returns [`OrderCacheError::InvalidSide`] when `side` is neither buy nor
    /// sell, and [`OrderCacheError::MissingField`] when `order_id` or
    /// `security_id` is blank.
    pub fn try_new(
        order_id: &str,
        security_id: &str,
        side: &str,
        quantity: u64,
        user: &str,
        company: &str,
    ) -> Result<Self, OrderCacheError> {
        if order_id.trim().is_empty() {
            return Err(OrderCacheError::MissingField { field: "orderId" });
        }
        if security_id.trim().is_empty() {
            return Err(OrderCacheError::MissingField {
                field: "securityId",
            });
        }
        let side = side.parse::<Side>()?;
        Ok(Self::new(order_id, security_id, side, quantity, user, company))
    }

    /// Unique order identifier.
    #[must_use]
    #[inline]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Identifier of the traded security.
    #[must_use]
    #[inline]
    pub fn security_id(&self) -> &str {
        &self.security_id
    }

    /// Buy or sell.
    #[must_use]
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of units ordered.
    #[must_use]
    #[inline]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// User that placed the order.
    #[must_use]
    #[inline]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Company the user trades for.
    #[must_use]
    #[inline]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns `true` when both orders belong to the same company (ASCII
    /// case-insensitive).
    #[must_use]
    #[inline]
    pub fn same_company(&self, other: &Order) -> bool {
        self.company.eq_ignore_ascii_case(&other.company)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ orderId: {}, securityId: {}, side: {}, qty: {}, user: {}, company: {} }}",
            self.order_id, self.security_id, self.side, self.quantity, self.user, self.company
        )
    }
}
