//! Aggregation & alert engine
//!
//! Pure functions over the session tables. Nothing here holds state or does
//! I/O; every percentage that could divide by zero returns
//! `DomainError::DivisionByZero` instead of producing NaN or infinity.

pub mod budget;
pub mod expenses;
pub mod goals;
pub mod portfolio;

pub use budget::{budget_alerts, budget_remaining};
pub use expenses::{category_totals, total_spent};
pub use goals::{goal_progress, goal_remaining, monthly_contribution};
pub use portfolio::{
    investment_gain, investment_return, portfolio_allocation, portfolio_total,
};

use crate::error::{DomainError, DomainResult};
use crate::models::Money;

/// `part / whole * 100`, refusing a zero denominator
pub(crate) fn percentage(part: Money, whole: Money, what: &'static str) -> DomainResult<f64> {
    if whole.is_zero() {
        return Err(DomainError::DivisionByZero { what });
    }
    Ok(part.cents() as f64 / whole.cents() as f64 * 100.0)
}
