//! Money type for representing currency amounts
//!
//! Amounts are held as whole cents in an `i64` so sums over expense and
//! portfolio tables stay exact. Sums go through `checked_add`/`try_sum`, so an
//! overflowing total is an `InvalidAmount` error rather than a wrap or panic.
//! Ratios are computed in `f64` by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Neg, Sub};

use crate::error::{DomainError, DomainResult};

/// A monetary amount in cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use finance_manager::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// The cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// The amount as a floating-point number of units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Convert a floating-point unit amount, rounding to the nearest cent
    ///
    /// NaN and infinities are rejected.
    pub fn from_f64(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::InvalidAmount(format!(
                "{} is not a finite number",
                value
            )));
        }
        let cents = (value * 100.0).round();
        if cents.abs() >= i64::MAX as f64 {
            return Err(DomainError::InvalidAmount(format!("{} is out of range", value)));
        }
        Ok(Self(cents as i64))
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10", "10.5", "10.50", "$10.50", "-10.50" and "1,250.00".
    /// More than two fractional digits is an error rather than a silent
    /// truncation.
    pub fn parse(s: &str) -> DomainResult<Self> {
        let raw = s.trim();
        let invalid = || DomainError::InvalidAmount(format!("cannot parse '{}'", raw));

        let (negative, rest) = match raw.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, raw),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");
        let (whole, frac) = rest.split_once('.').unwrap_or((rest.as_str(), ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
            || frac.len() > 2
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Fail with `InvalidAmount` if this amount is below zero
    pub fn ensure_non_negative(self, field: &str) -> DomainResult<Self> {
        if self.is_negative() {
            Err(DomainError::negative_amount(field, self))
        } else {
            Ok(self)
        }
    }

    /// Add two amounts, failing with `InvalidAmount` instead of overflowing
    pub fn checked_add(self, other: Self) -> DomainResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| DomainError::amount_overflow(self, other))
    }

    /// Sum amounts with overflow checking
    ///
    /// # Examples
    /// ```
    /// use finance_manager::models::Money;
    /// let total = Money::try_sum([Money::from_cents(150), Money::from_cents(250)]).unwrap();
    /// assert_eq!(total.cents(), 400);
    /// assert!(Money::try_sum([Money::from_cents(i64::MAX), Money::from_cents(1)]).is_err());
    /// ```
    pub fn try_sum<I: IntoIterator<Item = Self>>(amounts: I) -> DomainResult<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, amount| acc.checked_add(amount))
    }

    /// Format with a custom currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.units().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol("$"))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
