//! Goal progress

use chrono::{Datelike, NaiveDate};

use super::percentage;
use crate::error::DomainResult;
use crate::models::{FinancialGoal, Money};

/// `saved / target * 100`
///
/// Progress is not capped: a goal saved beyond its target reports more than
/// 100.
pub fn goal_progress(goal: &FinancialGoal) -> DomainResult<f64> {
    percentage(goal.saved_amount, goal.target_amount, "goal progress")
}

/// Amount still missing, never below zero
pub fn goal_remaining(goal: &FinancialGoal) -> Money {
    let remaining = goal.target_amount - goal.saved_amount;
    if remaining.is_negative() {
        Money::zero()
    } else {
        remaining
    }
}

/// Monthly saving needed to reach the goal by its target date
///
/// The remaining amount is spread over the calendar months between `as_of`
/// and the target date, rounded up to the cent. Within the target month the
/// whole remainder is due; after the target date nothing is scheduled.
pub fn monthly_contribution(goal: &FinancialGoal, as_of: NaiveDate) -> Money {
    let remaining = goal_remaining(goal);
    if remaining.is_zero() || goal.target_date < as_of {
        return Money::zero();
    }

    let months = months_between(as_of, goal.target_date);
    if months <= 0 {
        return remaining;
    }

    let months = i64::from(months);
    let cents = remaining.cents();
    let rounded_up = cents / months + i64::from(cents % months != 0);
    Money::from_cents(rounded_up)
}

fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    years * 12 + months
}
