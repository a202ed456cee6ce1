//! Core data models for finance-manager
//!
//! Four unrelated record types, one per view, plus the money and category
//! primitives they share.

pub mod budget;
pub mod category;
pub mod expense;
pub mod fields;
pub mod goal;
pub mod investment;
pub mod money;

pub use budget::BudgetLimit;
pub use category::Category;
pub use expense::Expense;
pub use fields::{names_match, parse_date};
pub use goal::FinancialGoal;
pub use investment::Investment;
pub use money::Money;
