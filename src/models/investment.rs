//! Investment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::normalize_name;
use super::money::Money;
use crate::error::DomainResult;

/// A holding in the portfolio, keyed by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investment {
    pub name: String,

    /// Amount originally invested
    pub principal_amount: Money,

    /// Date of purchase
    pub date: NaiveDate,

    pub current_value: Money,
}

impl Investment {
    /// A fresh holding is worth what was paid for it
    pub fn new(name: &str, principal_amount: Money, date: NaiveDate) -> DomainResult<Self> {
        Self::with_value(name, principal_amount, date, principal_amount)
    }

    pub fn with_value(
        name: &str,
        principal_amount: Money,
        date: NaiveDate,
        current_value: Money,
    ) -> DomainResult<Self> {
        let investment = Self {
            name: normalize_name("Investment", name)?,
            principal_amount,
            date,
            current_value,
        };
        investment.validate()?;
        Ok(investment)
    }

    pub fn validate(&self) -> DomainResult<()> {
        normalize_name("Investment", &self.name)?;
        self.principal_amount
            .ensure_non_negative("Investment amount")?;
        self.current_value.ensure_non_negative("Current value")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bought() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_new_investment_valued_at_principal() {
        let inv = Investment::new("Stocks", Money::from_units(10000), bought()).unwrap();
        assert_eq!(inv.current_value, inv.principal_amount);
    }

    #[test]
    fn test_with_value() {
        let inv = Investment::with_value(
            "Bonds",
            Money::from_units(5000),
            bought(),
            Money::from_units(5500),
        )
        .unwrap();
        assert_eq!(inv.current_value.units(), 5500);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Investment::new(" ", Money::from_units(1), bought()).is_err());
        assert!(
            Investment::with_value("X", Money::from_units(1), bought(), Money::from_cents(-5))
                .unwrap_err()
                .is_invalid_amount()
        );
    }
}
