//! Conversions from wire types to domain types for accounts.

use super::wire::TraderAccountResponse;
use super::{Account, TraderAccount};
use crate::domain::trader::Trader;
use crate::error::ConversionError;
use crate::shared::TraderId;
use rust_decimal::Decimal;

impl TryFrom<TraderAccountResponse> for TraderAccount {
    type Error = ConversionError;

    fn try_from(resp: TraderAccountResponse) -> Result<Self, Self::Error> {
        let trader = Trader::try_from(resp.trader)?;
        let amount = Decimal::try_from(resp.account.amount).map_err(|_| {
            ConversionError::AmountOutOfRange {
                trader_id: trader.id.get(),
            }
        })?;
        let trader_id = resp
            .account
            .trader_id
            .map(TraderId::new)
            .unwrap_or(trader.id);

        Ok(Self {
            trader,
            account: Account { trader_id, amount },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn payload(amount: serde_json::Value) -> TraderAccountResponse {
        serde_json::from_value(serde_json::json!({
            "trader": {
                "id": 42,
                "firstName": "Ada",
                "lastName": "Lovelace",
                "dob": "1815-12-10",
                "country": "UK",
                "email": "ada@test.com"
            },
            "account": { "id": 7, "traderId": 42, "amount": amount }
        }))
        .unwrap()
    }

    #[test]
    fn test_conversion_keeps_every_field() {
        let view = TraderAccount::try_from(payload(serde_json::json!(100))).unwrap();
        assert_eq!(view.trader.first_name, "Ada");
        assert_eq!(view.trader.last_name, "Lovelace");
        assert_eq!(view.trader.email, "ada@test.com");
        assert_eq!(view.trader.dob, "1815-12-10");
        assert_eq!(view.trader.country, "UK");
        assert_eq!(view.account.trader_id, TraderId::new(42));
        assert_eq!(view.account.amount, Decimal::from(100));
    }

    #[test]
    fn test_fractional_amount() {
        let view = TraderAccount::try_from(payload(serde_json::json!(150.25))).unwrap();
        assert_eq!(view.account.amount, Decimal::from_str("150.25").unwrap());
    }

    #[test]
    fn test_missing_amount_is_rejected() {
        let raw = serde_json::json!({
            "trader": { "id": 1 },
            "account": { "id": 1 }
        });
        assert!(serde_json::from_value::<TraderAccountResponse>(raw).is_err());
    }
}
