//! Conversions from wire types to domain types for quotes.

use super::wire::QuoteResponse;
use super::Quote;
use crate::error::ConversionError;
use rust_decimal::Decimal;

fn price(ticker: &str, field: &'static str, value: f64) -> Result<Decimal, ConversionError> {
    Decimal::try_from(value).map_err(|_| ConversionError::QuoteFieldOutOfRange {
        ticker: ticker.to_string(),
        field,
    })
}

impl TryFrom<QuoteResponse> for Quote {
    type Error = ConversionError;

    fn try_from(q: QuoteResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            last_price: price(&q.ticker, "lastPrice", q.last_price)?,
            bid_price: price(&q.ticker, "bidPrice", q.bid_price)?,
            ask_price: price(&q.ticker, "askPrice", q.ask_price)?,
            bid_size: q.bid_size,
            ask_size: q.ask_size,
            ticker: q.ticker,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_quote_conversion() {
        let resp: QuoteResponse = serde_json::from_str(
            r#"{"ticker":"AAPL","lastPrice":189.5,"bidPrice":189.25,"bidSize":300,
                "askPrice":189.75,"askSize":200}"#,
        )
        .unwrap();
        let quote = Quote::try_from(resp).unwrap();
        assert_eq!(quote.ticker, "AAPL");
        assert_eq!(quote.last_price, Decimal::from_str("189.5").unwrap());
        assert_eq!(quote.bid_size, 300);
        assert_eq!(quote.spread(), Some(Decimal::from_str("0.5").unwrap()));
    }

    #[test]
    fn test_out_of_range_price() {
        let resp = QuoteResponse {
            ticker: "XYZ".into(),
            last_price: 1e300,
            bid_price: 0.0,
            bid_size: 0,
            ask_price: 0.0,
            ask_size: 0,
        };
        assert_eq!(
            Quote::try_from(resp),
            Err(ConversionError::QuoteFieldOutOfRange {
                ticker: "XYZ".into(),
                field: "lastPrice"
            })
        );
    }
}
