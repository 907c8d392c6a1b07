//! Funds amount parsing for the deposit/withdraw modals.
//!
//! The raw input string is parsed into a `rust_decimal::Decimal` before any
//! request is built. No arithmetic on balances happens here.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Maximum number of fractional digits accepted for a funds amount.
pub const MAX_AMOUNT_SCALE: u32 = 2;

/// Largest single deposit or withdrawal accepted by the client.
pub const MAX_AMOUNT: i64 = 1_000_000_000;

/// Integer digits in `MAX_AMOUNT`; longer integer parts are rejected unparsed.
const MAX_AMOUNT_DIGITS: usize = 10;

/// A validated, strictly positive funds amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundsAmount(Decimal);

/// Reasons a funds amount is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    Empty,
    NotNumeric(String),
    NotPositive(String),
    TooPrecise { input: String, max_scale: u32 },
    TooLarge(String),
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Empty => write!(f, "Amount is required"),
            AmountError::NotNumeric(v) => write!(f, "'{}' is not a number", v),
            AmountError::NotPositive(v) => write!(f, "Amount must be positive, got {}", v),
            AmountError::TooPrecise { input, max_scale } => write!(
                f,
                "'{}' has more than {} decimal places",
                input, max_scale
            ),
            AmountError::TooLarge(v) => {
                write!(f, "Amount {} exceeds the limit of {}", v, MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for AmountError {}

impl FundsAmount {
    /// Parse raw operator input.
    ///
    /// Accepted grammar is `[+-]digits[.digits]` (either side of the point may
    /// be empty, not both). The grammar and digit counts are checked on the
    /// raw text, so nothing is rounded before validation.
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Empty);
        }

        let (negative, body) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(AmountError::NotNumeric(trimmed.to_string()));
        }

        let int_digits = int_part.trim_start_matches('0');
        let frac_digits = frac_part.trim_end_matches('0');
        if negative || (int_digits.is_empty() && frac_digits.is_empty()) {
            return Err(AmountError::NotPositive(trimmed.to_string()));
        }
        if frac_digits.len() > MAX_AMOUNT_SCALE as usize {
            return Err(AmountError::TooPrecise {
                input: trimmed.to_string(),
                max_scale: MAX_AMOUNT_SCALE,
            });
        }
        if int_digits.len() > MAX_AMOUNT_DIGITS {
            return Err(AmountError::TooLarge(trimmed.to_string()));
        }

        let int_digits = if int_digits.is_empty() { "0" } else { int_digits };
        let canonical = if frac_digits.is_empty() {
            int_digits.to_string()
        } else {
            format!("{}.{}", int_digits, frac_digits)
        };
        let value = Decimal::from_str_exact(&canonical)
            .map_err(|_| AmountError::NotNumeric(trimmed.to_string()))?;
        if value > Decimal::from(MAX_AMOUNT) {
            return Err(AmountError::TooLarge(trimmed.to_string()));
        }

        Ok(Self(value.normalize()))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Path segment form, e.g. `50` or `12.5`.
    pub fn to_path_segment(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for FundsAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FundsAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_number() {
        let amount = FundsAmount::parse("50").unwrap();
        assert_eq!(amount.to_path_segment(), "50");
    }

    #[test]
    fn test_parse_trims_and_normalizes() {
        assert_eq!(FundsAmount::parse(" 12.50 ").unwrap().to_path_segment(), "12.5");
        assert_eq!(FundsAmount::parse("100.00").unwrap().to_path_segment(), "100");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(FundsAmount::parse("   "), Err(AmountError::Empty));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(
            FundsAmount::parse("12abc"),
            Err(AmountError::NotNumeric("12abc".to_string()))
        );
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert!(matches!(FundsAmount::parse("0"), Err(AmountError::NotPositive(_))));
        assert!(matches!(FundsAmount::parse("-5"), Err(AmountError::NotPositive(_))));
    }

    #[test]
    fn test_rejects_sub_cent_precision() {
        assert!(matches!(
            FundsAmount::parse("1.005"),
            Err(AmountError::TooPrecise { max_scale: 2, .. })
        ));
        // trailing zeros do not count
        assert!(FundsAmount::parse("1.500").is_ok());
    }

    #[test]
    fn test_rejects_above_limit() {
        assert!(FundsAmount::parse("1000000000").is_ok());
        assert!(matches!(
            FundsAmount::parse("1000000000.01"),
            Err(AmountError::TooLarge(_))
        ));
    }

    #[test]
    fn test_long_fractions_are_rejected_not_rounded() {
        for input in [
            "50.0000000000000000000000000001",
            "1.0000000000000000000000000000009",
        ] {
            assert!(
                matches!(FundsAmount::parse(input), Err(AmountError::TooPrecise { .. })),
                "{input} was accepted"
            );
        }
    }

    #[test]
    fn test_rejects_separators_and_exponents() {
        for input in ["1_000", "1e3", "1,000", ".", "+-1", "1.2.3"] {
            assert!(
                matches!(FundsAmount::parse(input), Err(AmountError::NotNumeric(_))),
                "{input}"
            );
        }
        assert_eq!(FundsAmount::parse("12.").unwrap().to_path_segment(), "12");
    }

    #[test]
    fn test_huge_integer_is_too_large() {
        let input = "9".repeat(32);
        assert_eq!(
            FundsAmount::parse(&input),
            Err(AmountError::TooLarge(input.clone()))
        );
    }

    #[test]
    fn test_leading_zeros_and_plus_sign() {
        assert_eq!(FundsAmount::parse("+007.50").unwrap().to_path_segment(), "7.5");
        assert_eq!(FundsAmount::parse(".25").unwrap().to_path_segment(), "0.25");
        assert!(matches!(FundsAmount::parse("-0.00"), Err(AmountError::NotPositive(_))));
    }
}
