/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Prelude module that re-exports commonly used types and functions.
//!
//! Instead of importing each type individually, you can use:
//!
//! ```rust
//! use ordercache_rs::prelude::*;
//! ```

// Core cache types
pub use crate::ordercache::{CacheValidity, OrderCache, OrderCacheError};

// Order value types
pub use crate::ordercache::{Order, PairingState, Side};

// Results and matching primitives
pub use crate::ordercache::{CancelResult, MatchTally, matched_quantity};

// Sample data
pub use crate::ordercache::samples;

// Utility functions
pub use crate::utils::setup_logger;
