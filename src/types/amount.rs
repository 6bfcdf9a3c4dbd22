//! Currency amount type for the wallet ledger
//!
//! `Bitcoin` is a signed decimal quantity of the ledger's unit. It is backed by
//! `rust_decimal::Decimal` so that deposits and withdrawals add up exactly,
//! which binary floating point cannot guarantee for decimal fractions.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Unit suffix used when displaying amounts
pub const UNIT: &str = "BTC";

/// Number of decimal places shown when displaying amounts
pub const DISPLAY_PRECISION: usize = 4;

/// A signed quantity of the ledger's unit
///
/// Displays as the value rounded to four decimal places followed by the unit,
/// e.g. `2.0000 BTC`. Midpoints round away from zero, so `1.23455` shows as
/// `1.2346 BTC`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bitcoin(Decimal);

impl Bitcoin {
    /// Zero of the ledger's unit
    pub const ZERO: Bitcoin = Bitcoin(Decimal::ZERO);

    /// Create an amount from a mantissa and a scale
    ///
    /// `Bitcoin::new(125, 2)` is `1.25 BTC`.
    pub fn new(num: i64, scale: u32) -> Self {
        Bitcoin(Decimal::new(num, scale))
    }

    /// The underlying decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// True if the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// True if the amount is strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Add two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Bitcoin) -> Option<Bitcoin> {
        self.0.checked_add(other.0).map(Bitcoin)
    }

    /// Subtract two amounts, returning `None` on overflow
    pub fn checked_sub(self, other: Bitcoin) -> Option<Bitcoin> {
        self.0.checked_sub(other.0).map(Bitcoin)
    }
}

impl From<Decimal> for Bitcoin {
    fn from(value: Decimal) -> Self {
        Bitcoin(value)
    }
}

impl fmt::Display for Bitcoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Decimal's precision flag truncates, so round first
        let rounded = self.0.round_dp_with_strategy(
            DISPLAY_PRECISION as u32,
            RoundingStrategy::MidpointAwayFromZero,
        );
        write!(f, "{:.*} {}", DISPLAY_PRECISION, rounded, UNIT)
    }
}

/// Parses a plain decimal number such as `2`, `-1.5` or `0.0001`.
///
/// Surrounding whitespace is ignored. Only digits, one sign and one decimal
/// point are accepted: digit separators (`1_000`), exponents (`1e2`) and the
/// unit suffix are rejected.
impl FromStr for Bitcoin {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
        {
            return Err(rust_decimal::Error::ErrorString(format!(
                "invalid amount '{}'",
                s
            )));
        }
        Decimal::from_str(s).map(Bitcoin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::whole(Bitcoin::new(2, 0), "2.0000 BTC")]
    #[case::zero(Bitcoin::ZERO, "0.0000 BTC")]
    #[case::fraction(Bitcoin::new(532, 2), "5.3200 BTC")]
    #[case::negative(Bitcoin::new(-1, 0), "-1.0000 BTC")]
    #[case::smallest_shown(Bitcoin::new(1, 4), "0.0001 BTC")]
    #[case::rounds_up_to_whole(Bitcoin::new(99999, 5), "1.0000 BTC")]
    #[case::rounds_last_digit(Bitcoin::new(123456, 5), "1.2346 BTC")]
    #[case::midpoint_away_from_zero(Bitcoin::new(123455, 5), "1.2346 BTC")]
    #[case::rounds_down(Bitcoin::new(123454, 5), "1.2345 BTC")]
    #[case::below_display_floor(Bitcoin::new(6, 5), "0.0001 BTC")]
    fn test_display(#[case] amount: Bitcoin, #[case] expected: &str) {
        assert_eq!(amount.to_string(), expected);
    }

    #[rstest]
    #[case::integer("2", Bitcoin::new(2, 0))]
    #[case::decimal("4.32", Bitcoin::new(432, 2))]
    #[case::negative("-1.00", Bitcoin::new(-1, 0))]
    #[case::padded("  0.5 \n", Bitcoin::new(5, 1))]
    fn test_parse_valid(#[case] input: &str, #[case] expected: Bitcoin) {
        assert_eq!(input.parse::<Bitcoin>().unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::word("abc")]
    #[case::with_unit("1.0 BTC")]
    #[case::digit_separator("1_000")]
    #[case::exponent("1e2")]
    #[case::two_points("1.2.3")]
    fn test_parse_invalid(#[case] input: &str) {
        assert!(input.parse::<Bitcoin>().is_err());
    }

    #[test]
    fn test_parsed_amount_keeps_full_precision() {
        let amount: Bitcoin = "0.00001".parse().unwrap();

        assert_eq!(amount, Bitcoin::new(1, 5));
        assert_eq!(amount.to_string(), "0.0000 BTC");
    }

    #[test]
    fn test_equality_ignores_trailing_zeros() {
        assert_eq!(Bitcoin::new(100, 2), Bitcoin::new(1, 0));
    }

    #[test]
    fn test_sign_checks() {
        assert!(Bitcoin::new(1, 4).is_positive());
        assert!(!Bitcoin::ZERO.is_positive());
        assert!(!Bitcoin::ZERO.is_negative());
        assert!(Bitcoin::new(-1, 4).is_negative());
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Bitcoin::from(Decimal::MAX);
        assert_eq!(max.checked_add(Bitcoin::new(1, 0)), None);
        assert_eq!(
            Bitcoin::new(1, 0).checked_add(Bitcoin::new(5, 1)),
            Some(Bitcoin::new(15, 1))
        );
    }

    #[test]
    fn test_checked_sub_goes_negative() {
        assert_eq!(
            Bitcoin::new(1, 0).checked_sub(Bitcoin::new(2, 0)),
            Some(Bitcoin::new(-1, 0))
        );
    }
}
