//! External price-feed capability
//!
//! Read-only adapter resolving a feed identifier to a current price. No
//! mutation, no caching, and no retries at this layer: a failure here is
//! fatal to the calling operation, because the condition cannot be
//! evaluated without a reading.

use rust_decimal::Decimal;
use types::ids::FeedId;

use crate::errors::OracleError;

/// Read-only price oracle.
pub trait PriceOracle {
    /// Latest numeric price for the given feed.
    fn current_price(&self, feed: &FeedId) -> Result<Decimal, OracleError>;
}
