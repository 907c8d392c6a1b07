//! Conversions from wire types to domain types for traders.

use super::wire::{DobWire, TraderResponse};
use super::Trader;
use crate::error::ConversionError;
use crate::shared::TraderId;

impl DobWire {
    /// Display form: strings verbatim, timestamps as `YYYY-MM-DD` (UTC).
    pub fn into_display(self) -> Result<String, ConversionError> {
        match self {
            DobWire::Text(text) => Ok(text),
            DobWire::EpochMillis(ms) => chrono::DateTime::from_timestamp_millis(ms)
                .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
                .ok_or(ConversionError::DobOutOfRange(ms)),
        }
    }
}

impl TryFrom<TraderResponse> for Trader {
    type Error = ConversionError;

    fn try_from(t: TraderResponse) -> Result<Self, Self::Error> {
        let dob = match t.dob {
            Some(dob) => dob.into_display()?,
            None => String::new(),
        };
        Ok(Self {
            id: TraderId::new(t.id),
            first_name: t.first_name.unwrap_or_default(),
            last_name: t.last_name.unwrap_or_default(),
            email: t.email.unwrap_or_default(),
            dob,
            country: t.country.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(dob: serde_json::Value) -> TraderResponse {
        serde_json::from_value(serde_json::json!({
            "id": 2,
            "firstName": "Hellen",
            "lastName": "Miller",
            "dob": dob,
            "country": "Austria",
            "email": "hellen@test.com"
        }))
        .unwrap()
    }

    #[test]
    fn test_text_dob_passes_through() {
        let trader = Trader::try_from(sample(serde_json::json!("1985-07-21"))).unwrap();
        assert_eq!(trader.id, TraderId::new(2));
        assert_eq!(trader.full_name(), "Hellen Miller");
        assert_eq!(trader.dob, "1985-07-21");
        assert_eq!(trader.country, "Austria");
        assert_eq!(trader.email, "hellen@test.com");
    }

    #[test]
    fn test_epoch_millis_dob_is_formatted() {
        // 1990-05-17T00:00:00Z
        let trader = Trader::try_from(sample(serde_json::json!(642_902_400_000i64))).unwrap();
        assert_eq!(trader.dob, "1990-05-17");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let resp: TraderResponse = serde_json::from_str(r#"{"id": 9, "email": null}"#).unwrap();
        let trader = Trader::try_from(resp).unwrap();
        assert_eq!(trader.first_name, "");
        assert_eq!(trader.email, "");
        assert_eq!(trader.dob, "");
    }

    #[test]
    fn test_out_of_range_dob() {
        let err = Trader::try_from(sample(serde_json::json!(i64::MAX))).unwrap_err();
        assert_eq!(err, ConversionError::DobOutOfRange(i64::MAX));
    }
}
