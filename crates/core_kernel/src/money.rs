//! Money types with fixed-point decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal so that repeated compounding never drifts the way
//! binary floating point does.
//!
//! # Rounding
//!
//! Amounts are stored exactly as given; input validation caps their precision
//! (see [`crate::validation::ensure_amount`]). Whenever an amount is settled
//! to the currency's minor unit (a monthly interest charge, a balance
//! reported to a caller) it is rounded half-up, i.e. midpoints move away from
//! zero: `0.005 -> 0.01`, `-0.005 -> -0.01`.
//!
//! Arithmetic between amounts is checked and reports
//! [`MoneyError::Overflow`] instead of panicking.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Decimal places used for settled currency amounts
pub const CURRENCY_DP: u32 = 2;

/// Rounds a raw amount to cents, half-up
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CHF,
    INR,
    AUD,
    CAD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => CURRENCY_DP,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CHF => "CHF ",
            Currency::INR => "₹",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::INR => "INR",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    Overflow,
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Shorthand for a USD amount
    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, Currency::USD)
    }

    /// Creates Money from an integer amount in minor units (e.g., cents)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        let divisor = Decimal::new(10_i64.pow(currency.decimal_places()), 0);
        Self::new(Decimal::new(minor_units, 0) / divisor, currency)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Rounds half-up to the currency's standard decimal places
    pub fn round_to_currency(&self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                self.currency.decimal_places(),
                RoundingStrategy::MidpointAwayFromZero,
            ),
            currency: self.currency,
        }
    }

    /// Returns the larger of the amount and zero
    pub fn non_negative(&self) -> Self {
        if self.is_negative() {
            Self::zero(self.currency)
        } else {
            *self
        }
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }

    /// Checked addition that returns an error on currency mismatch or overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch or overflow
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Returns `self / denominator` as a plain fraction
    ///
    /// Callers that must tolerate a zero denominator check for it first; this
    /// never divides by zero.
    pub fn ratio_to(&self, denominator: &Money) -> Result<Decimal, MoneyError> {
        self.ensure_same_currency(denominator)?;
        if denominator.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        self.amount
            .checked_div(denominator.amount)
            .ok_or(MoneyError::Overflow)
    }

    /// Sums an iterator of amounts that must all share `currency`
    pub fn sum<'a, I>(amounts: I, currency: Currency) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.checked_add(m))
    }
}

impl fmt::Display for Money {
    /// Formats as `$12,345.67`, with a leading minus for negative amounts
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places() as usize;
        let rounded = self.round_to_currency().amount.abs();
        let text = format!("{:.dp$}", rounded, dp = dp);
        let (whole, fraction) = match text.split_once('.') {
            Some((w, fr)) => (w.to_string(), Some(fr.to_string())),
            None => (text.clone(), None),
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() && !rounded.is_zero() { "-" } else { "" };
        match fraction {
            Some(fr) => write!(f, "{}{}{}.{}", sign, self.currency.symbol(), grouped, fr),
            None => write!(f, "{}{}{}", sign, self.currency.symbol(), grouped),
        }
    }
}

/// Represents a rate as a fraction (e.g., an interest or return rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.05 for 5%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    pub fn zero() -> Self {
        Self { value: Decimal::ZERO }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Nominal monthly rate for an annual rate (`annual / 12`)
    pub fn monthly(&self) -> Decimal {
        self.value / dec!(12)
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(2).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_round_currency_is_half_up() {
        assert_eq!(round_currency(dec!(1.005)), dec!(1.01));
        assert_eq!(round_currency(dec!(1.004)), dec!(1.00));
        assert_eq!(round_currency(dec!(-1.005)), dec!(-1.01));
    }

    #[test]
    fn test_currency_mismatch() {
        let usd = Money::new(dec!(100.00), Currency::USD);
        let eur = Money::new(dec!(100.00), Currency::EUR);

        let result = usd.checked_add(&eur);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let huge = Money::usd(Decimal::MAX);
        assert_eq!(huge.checked_add(&Money::usd(dec!(1))), Err(MoneyError::Overflow));
        assert_eq!(
            Money::usd(Decimal::MIN).checked_sub(&Money::usd(dec!(1))),
            Err(MoneyError::Overflow)
        );
        assert_eq!(huge.ratio_to(&Money::usd(dec!(0.01))), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_ratio_to_zero_denominator() {
        let a = Money::usd(dec!(10));
        assert_eq!(a.ratio_to(&Money::zero(Currency::USD)), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::usd(dec!(12345.678)).to_string(), "$12,345.68");
        assert_eq!(Money::usd(dec!(-500)).to_string(), "-$500.00");
        assert_eq!(Money::usd(dec!(999)).to_string(), "$999.00");
        assert_eq!(Money::new(dec!(1234567), Currency::JPY).to_string(), "¥1,234,567");
    }

    #[test]
    fn test_rate_monthly() {
        let rate = Rate::from_percentage(dec!(12));
        assert_eq!(rate.monthly(), dec!(0.01));
        assert_eq!(rate.to_string(), "12%");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Money::usd(dec!(1500.25))).unwrap();
        assert_eq!(json["amount"], "1500.25");
        assert_eq!(json["currency"], "USD");

        let rate: Rate = serde_json::from_str("\"0.18\"").unwrap();
        assert_eq!(rate, Rate::from_percentage(dec!(18)));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_sum_matches_decimal_sum(
            amounts in proptest::collection::vec(0i64..10_000_000i64, 0..20)
        ) {
            let money: Vec<Money> = amounts
                .iter()
                .map(|a| Money::from_minor(*a, Currency::USD))
                .collect();
            let total = Money::sum(&money, Currency::USD).unwrap();
            let expected: Decimal = money.iter().map(|m| m.amount()).sum();
            prop_assert_eq!(total.amount(), expected);
        }

        #[test]
        fn round_currency_never_moves_more_than_half_a_cent(minor in -1_000_000_000i64..1_000_000_000i64) {
            let raw = Decimal::new(minor, 4);
            let rounded = round_currency(raw);
            prop_assert!((rounded - raw).abs() <= dec!(0.005));
        }
    }
}
