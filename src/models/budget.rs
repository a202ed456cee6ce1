//! Budget limit model
//!
//! One limit per category. The `spent` figure is reported from outside and is
//! not derived from the expense table.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;
use crate::error::DomainResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLimit {
    pub category: Category,

    /// Maximum planned spending for the category
    pub limit: Money,

    /// Amount spent so far
    pub spent: Money,
}

impl BudgetLimit {
    /// Create a limit with nothing spent yet
    pub fn new(category: Category, limit: Money) -> DomainResult<Self> {
        Self::with_spent(category, limit, Money::zero())
    }

    pub fn with_spent(category: Category, limit: Money, spent: Money) -> DomainResult<Self> {
        let budget = Self {
            category,
            limit,
            spent,
        };
        budget.validate()?;
        Ok(budget)
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.limit.ensure_non_negative("Budget limit")?;
        self.spent.ensure_non_negative("Spent amount")?;
        Ok(())
    }

    /// Strictly over the limit; spending exactly the limit is not an overrun
    pub fn is_exceeded(&self) -> bool {
        self.spent > self.limit
    }

    /// Limit minus spent (negative once exceeded)
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }
}
