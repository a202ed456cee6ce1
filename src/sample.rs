//! Sample data for a fresh session
//!
//! Mirrors the demo tables the dashboard opens with: a run of random daily
//! expenses and small hard-coded budget, goal and portfolio tables.

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::error::{DomainError, DomainResult};
use crate::models::{parse_date, BudgetLimit, Category, Expense, FinancialGoal, Investment, Money};

/// One expense per day starting at `start`
///
/// Amounts are uniform in [10.00, 100.00) at cent resolution and the
/// category is picked uniformly from the fixed set. Fails with `InvalidDate`
/// when the run of days would pass the last date chrono can represent.
pub fn expenses<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    start: NaiveDate,
) -> DomainResult<Vec<Expense>> {
    let out_of_range = || {
        DomainError::InvalidDate(format!("{} plus {} days is out of range", start, count))
    };
    start
        .checked_add_days(Days::new(count as u64))
        .ok_or_else(out_of_range)?;

    (0..count)
        .map(|day| {
            let date = start
                .checked_add_days(Days::new(day as u64))
                .ok_or_else(out_of_range)?;
            Ok(Expense {
                date,
                amount: Money::from_cents(rng.gen_range(1_000..10_000)),
                category: Category::ALL[rng.gen_range(0..Category::ALL.len())],
            })
        })
        .collect()
}

pub fn budgets() -> DomainResult<Vec<BudgetLimit>> {
    [
        (Category::Food, 200, 180),
        (Category::Entertainment, 150, 160),
        (Category::Bills, 300, 290),
        (Category::Shopping, 250, 240),
        (Category::Miscellaneous, 100, 90),
    ]
    .into_iter()
    .map(|(category, limit, spent)| {
        BudgetLimit::with_spent(category, Money::from_units(limit), Money::from_units(spent))
    })
    .collect()
}

pub fn goals() -> DomainResult<Vec<FinancialGoal>> {
    [
        ("Vacation", 2000, "2024-12-31", 500),
        ("Emergency Fund", 5000, "2024-06-30", 2000),
        ("New Laptop", 1000, "2024-09-30", 300),
    ]
    .into_iter()
    .map(|(name, target, date, saved)| {
        FinancialGoal::with_saved(
            name,
            Money::from_units(target),
            parse_date(date)?,
            Money::from_units(saved),
        )
    })
    .collect()
}

pub fn investments() -> DomainResult<Vec<Investment>> {
    [
        ("Stocks", 10000, "2024-01-01", 15000),
        ("Bonds", 5000, "2023-06-01", 5500),
        ("Real Estate", 20000, "2023-09-01", 21000),
    ]
    .into_iter()
    .map(|(name, principal, date, value)| {
        Investment::with_value(
            name,
            Money::from_units(principal),
            parse_date(date)?,
            Money::from_units(value),
        )
    })
    .collect()
}
