//! Quote domain: the daily list shown on `/quotes`.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::QuotesState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub ticker: String,
    pub last_price: Decimal,
    pub bid_price: Decimal,
    pub bid_size: i64,
    pub ask_price: Decimal,
    pub ask_size: i64,
}

impl Quote {
    /// Ask minus bid. `None` if the difference overflows `Decimal`.
    pub fn spread(&self) -> Option<Decimal> {
        self.ask_price.checked_sub(self.bid_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(bid: Decimal, ask: Decimal) -> Quote {
        Quote {
            ticker: "XYZ".to_string(),
            last_price: ask,
            bid_price: bid,
            bid_size: 1,
            ask_price: ask,
            ask_size: 1,
        }
    }

    #[test]
    fn test_spread() {
        assert_eq!(
            quote(Decimal::new(10025, 2), Decimal::new(10050, 2)).spread(),
            Some(Decimal::new(25, 2))
        );
    }

    #[test]
    fn test_spread_overflow_is_none() {
        assert_eq!(quote(-Decimal::MAX, Decimal::MAX).spread(), None);
    }
}
