//! Expense model
//!
//! An expense is a dated, categorized outflow. Once added to a session it is
//! never edited.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;
use crate::error::DomainResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,

    /// Amount spent (never negative)
    pub amount: Money,

    pub category: Category,
}

impl Expense {
    /// Create a validated expense
    pub fn new(date: NaiveDate, amount: Money, category: Category) -> DomainResult<Self> {
        let expense = Self {
            date,
            amount,
            category,
        };
        expense.validate()?;
        Ok(expense)
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.amount.ensure_non_negative("Expense amount")?;
        Ok(())
    }
}
