//! Stock level classification for the stock badge.

use thiserror::Error;

/// Counts strictly below this are low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StockError {
    #[error("Invalid stock quantity {0}: must be zero or greater")]
    InvalidQuantity(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockState {
    Low,
    Ok,
}

impl StockState {
    /// Badge modifier class for this state.
    pub fn class(self) -> &'static str {
        match self {
            StockState::Low => "sh-stock-badge-low",
            StockState::Ok => "sh-stock-badge-ok",
        }
    }
}

/// Classify a stock count. Negative counts are rejected rather than read as low.
pub fn classify(count: i64) -> Result<StockState, StockError> {
    if count < 0 {
        return Err(StockError::InvalidQuantity(count));
    }
    if count < LOW_STOCK_THRESHOLD {
        Ok(StockState::Low)
    } else {
        Ok(StockState::Ok)
    }
}
