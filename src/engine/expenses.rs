//! Expense aggregation

use std::collections::BTreeMap;

use crate::error::DomainResult;
use crate::models::{Category, Expense, Money};

/// Sum expense amounts per category
///
/// Only categories that appear in `expenses` show up in the result.
pub fn category_totals(expenses: &[Expense]) -> DomainResult<BTreeMap<Category, Money>> {
    let mut totals: BTreeMap<Category, Money> = BTreeMap::new();
    for expense in expenses {
        let total = totals.entry(expense.category).or_default();
        *total = total.checked_add(expense.amount)?;
    }
    Ok(totals)
}

pub fn total_spent(expenses: &[Expense]) -> DomainResult<Money> {
    Money::try_sum(expenses.iter().map(|e| e.amount))
}
