//! Financial goal model
//!
//! A goal is a named savings target with a deadline. Goals are keyed by name
//! within a session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fields::normalize_name;
use super::money::Money;
use crate::error::DomainResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub name: String,

    /// Amount to reach
    pub target_amount: Money,

    pub target_date: NaiveDate,

    /// Amount put aside so far; may exceed the target
    pub saved_amount: Money,
}

impl FinancialGoal {
    /// Create a goal with nothing saved yet
    pub fn new(name: &str, target_amount: Money, target_date: NaiveDate) -> DomainResult<Self> {
        Self::with_saved(name, target_amount, target_date, Money::zero())
    }

    pub fn with_saved(
        name: &str,
        target_amount: Money,
        target_date: NaiveDate,
        saved_amount: Money,
    ) -> DomainResult<Self> {
        let goal = Self {
            name: normalize_name("Goal", name)?,
            target_amount,
            target_date,
            saved_amount,
        };
        goal.validate()?;
        Ok(goal)
    }

    /// A zero target is accepted here; it only fails once progress is asked for
    pub fn validate(&self) -> DomainResult<()> {
        normalize_name("Goal", &self.name)?;
        self.target_amount.ensure_non_negative("Goal amount")?;
        self.saved_amount.ensure_non_negative("Saved amount")?;
        Ok(())
    }

    pub fn is_reached(&self) -> bool {
        self.saved_amount >= self.target_amount
    }
}
