//! Money type for representing monetary values.
//!
//! Amounts are stored in the smallest unit of the currency (e.g., cents for
//! EUR). The backend reports order totals as decimal major-unit amounts;
//! `from_major` performs the round-to-nearest conversion at that boundary,
//! and every calculation inside the core stays in integer minor units.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies of the marketplace's launch markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    EUR,
    DKK,
    SEK,
    NOK,
    ISK,
    GBP,
    CHF,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "EUR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::DKK => "DKK",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::ISK => "ISK",
            Currency::GBP => "GBP",
            Currency::CHF => "CHF",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "€").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "\u{20ac}",
            Currency::DKK => "kr.",
            Currency::SEK => "kr",
            Currency::NOK => "kr",
            Currency::ISK => "kr",
            Currency::GBP => "\u{00a3}",
            Currency::CHF => "CHF",
            Currency::USD => "$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::ISK => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "EUR" => Some(Currency::EUR),
            "DKK" => Some(Currency::DKK),
            "SEK" => Some(Currency::SEK),
            "NOK" => Some(Currency::NOK),
            "ISK" => Some(Currency::ISK),
            "GBP" => Some(Currency::GBP),
            "CHF" => Some(Currency::CHF),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// Convert a decimal major-unit amount, rounding to the nearest minor unit.
    ///
    /// ```
    /// use lastcall_commerce::money::{Currency, Money};
    /// let total = Money::from_major(29.99, Currency::EUR);
    /// assert_eq!(total.minor, 2999);
    /// ```
    pub fn from_major(amount: f64, currency: Currency) -> Self {
        let scale = 10_i64.pow(currency.decimal_places());
        let minor = (amount * scale as f64).round() as i64;
        Self::new(minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.minor < 0
    }

    /// Convert to a decimal major-unit value. Display/boundary use only.
    pub fn to_major(&self) -> f64 {
        let scale = 10_i64.pow(self.currency.decimal_places());
        self.minor as f64 / scale as f64
    }

    /// Format as a display string (e.g., "€49.99").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_major())
    }

    /// Add another value, returning `None` on currency mismatch or overflow.
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let minor = self.minor.checked_add(other.minor)?;
        Some(Money::new(minor, self.currency))
    }

    /// Subtract another value, returning `None` on currency mismatch or overflow.
    pub fn checked_sub(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let minor = self.minor.checked_sub(other.minor)?;
        Some(Money::new(minor, self.currency))
    }

    /// Multiply by a scalar, returning `None` on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        let minor = self.minor.checked_mul(factor)?;
        Some(Money::new(minor, self.currency))
    }

    /// Sum an iterator of values, returning `None` on mismatch or overflow.
    pub fn checked_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.fold(Some(Money::zero(currency)), |acc, m| {
            acc.and_then(|a| a.checked_add(m))
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor() {
        let m = Money::new(4999, Currency::EUR);
        assert_eq!(m.minor, 4999);
        assert_eq!(m.currency, Currency::EUR);
    }

    #[test]
    fn test_money_from_major() {
        let m = Money::from_major(29.99, Currency::EUR);
        assert_eq!(m.minor, 2999);

        // Round-to-nearest, not truncation: 4.565 * 100 can land just below
        // 456.5 in binary floating point, but 4.57 is unambiguous.
        let m = Money::from_major(4.57, Currency::EUR);
        assert_eq!(m.minor, 457);

        // ISK has no minor unit
        let m = Money::from_major(1200.0, Currency::ISK);
        assert_eq!(m.minor, 1200);
    }

    #[test]
    fn test_money_to_major() {
        let m = Money::new(4999, Currency::EUR);
        assert!((m.to_major() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4999, Currency::EUR);
        assert_eq!(m.display(), "\u{20ac}49.99");

        let m = Money::new(1200, Currency::ISK);
        assert_eq!(m.display(), "kr1200");
    }

    #[test]
    fn test_checked_add() {
        let a = Money::new(1000, Currency::EUR);
        let b = Money::new(500, Currency::EUR);
        assert_eq!(a.checked_add(&b).unwrap().minor, 1500);
    }

    #[test]
    fn test_checked_sub() {
        let a = Money::new(1000, Currency::EUR);
        let b = Money::new(300, Currency::EUR);
        assert_eq!(a.checked_sub(&b).unwrap().minor, 700);
    }

    #[test]
    fn test_checked_mul() {
        let m = Money::new(999, Currency::EUR);
        assert_eq!(m.checked_mul(3).unwrap().minor, 2997);
        assert!(Money::new(i64::MAX, Currency::EUR).checked_mul(2).is_none());
    }

    #[test]
    fn test_currency_mismatch() {
        let eur = Money::new(1000, Currency::EUR);
        let dkk = Money::new(1000, Currency::DKK);
        assert!(eur.checked_add(&dkk).is_none());
        assert!(eur.checked_sub(&dkk).is_none());
    }

    #[test]
    fn test_checked_sum() {
        let values = [
            Money::new(1000, Currency::EUR),
            Money::new(250, Currency::EUR),
            Money::new(750, Currency::EUR),
        ];
        let sum = Money::checked_sum(values.iter(), Currency::EUR).unwrap();
        assert_eq!(sum.minor, 2000);
    }

    #[test]
    fn test_checked_sum_empty() {
        let sum = Money::checked_sum(std::iter::empty(), Currency::EUR).unwrap();
        assert!(sum.is_zero());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("EUR"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("dkk"), Some(Currency::DKK));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
