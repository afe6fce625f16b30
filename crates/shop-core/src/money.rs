//! Money type for representing monetary values.
//!
//! Amounts are integers in the smallest unit of the currency (kopecks,
//! cents), so totals never pick up floating-point rounding.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₽").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Separator placed between groups of three integer digits.
    pub fn group_separator(&self) -> char {
        match self {
            Currency::USD => ',',
            Currency::RUB | Currency::EUR => '\u{a0}',
        }
    }

    /// Separator placed before the fractional digits.
    pub fn decimal_separator(&self) -> char {
        match self {
            Currency::USD => '.',
            Currency::RUB | Currency::EUR => ',',
        }
    }

    /// Whether the symbol follows the amount ("129 990 ₽") or leads it ("$49.99").
    pub fn symbol_is_suffix(&self) -> bool {
        !matches!(self, Currency::USD)
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RUB" => Some(Currency::RUB),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }

    /// Parse a currency code string, failing with a typed error.
    pub fn parse(code: &str) -> Result<Self, CommerceError> {
        Self::from_code(code).ok_or_else(|| CommerceError::UnknownCurrency(code.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Try to add another Money value.
    ///
    /// Returns None if currencies differ or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: u64) -> Option<Money> {
        let factor = i64::try_from(factor).ok()?;
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Format for display, grouped per the currency's locale.
    ///
    /// The fractional part is only shown when it is non-zero, so whole
    /// amounts read as "129 990 ₽".
    pub fn display(&self) -> String {
        let amount = self.display_amount();
        let symbol = self.currency.symbol();
        if self.currency.symbol_is_suffix() {
            format!("{amount} {symbol}")
        } else if let Some(unsigned) = amount.strip_prefix('-') {
            format!("-{symbol}{unsigned}")
        } else {
            format!("{symbol}{amount}")
        }
    }

    /// Format the grouped amount without the currency symbol.
    pub fn display_amount(&self) -> String {
        let divisor = 10_u64.pow(self.currency.decimal_places());
        let magnitude = self.amount_minor.unsigned_abs();
        let whole = magnitude / divisor;
        let fraction = magnitude % divisor;

        let mut out = String::new();
        if self.amount_minor < 0 {
            out.push('-');
        }
        out.push_str(&group_digits(whole, self.currency.group_separator()));
        if fraction != 0 {
            let places = self.currency.decimal_places() as usize;
            out.push(self.currency.decimal_separator());
            out.push_str(&format!("{fraction:0places$}"));
        }
        out
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rub_display_groups_and_suffixes() {
        let m = Money::new(12_999_000, Currency::RUB);
        assert_eq!(m.display(), "129\u{a0}990 \u{20bd}");

        let m = Money::new(100_000_050, Currency::RUB);
        assert_eq!(m.display(), "1\u{a0}000\u{a0}000,50 \u{20bd}");
    }

    #[test]
    fn test_usd_display_prefix() {
        assert_eq!(Money::new(123_450, Currency::USD).display(), "$1,234.50");
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(-500, Currency::USD).display(), "-$5");
    }

    #[test]
    fn test_small_amounts() {
        assert_eq!(Money::zero(Currency::RUB).display_amount(), "0");
        assert_eq!(Money::new(5, Currency::EUR).display_amount(), "0,05");
        assert_eq!(Money::new(99_900, Currency::EUR).display_amount(), "999");
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let rub = Money::new(1000, Currency::RUB);
        let usd = Money::new(1000, Currency::USD);
        assert!(rub.try_add(&usd).is_none());
        assert_eq!(rub.try_add(&rub).unwrap().amount_minor, 2000);
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX / 2, Currency::RUB);
        assert!(m.try_multiply(3).is_none());
        assert_eq!(Money::new(250, Currency::RUB).try_multiply(4).unwrap().amount_minor, 1000);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("RUB"), Some(Currency::RUB));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
        assert_eq!(
            Currency::parse("XYZ"),
            Err(CommerceError::UnknownCurrency("XYZ".to_string()))
        );
    }
}
