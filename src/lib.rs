//! finance-manager - session-scoped personal finance views
//!
//! This library provides four independent views over small in-memory tables:
//! expense categorization, budget alerts, financial goal tracking and an
//! investment portfolio. Nothing is persisted; a session starts from sample
//! data (or empty) and lives until it is dropped.
//!
//! # Architecture
//!
//! - `models`: Typed records (expenses, budget limits, goals, investments)
//! - `engine`: Pure aggregation and alerting functions
//! - `session`: Per-session state and the mutations the UI can request
//! - `reports`: One view model per dashboard view
//! - `display`: Terminal tables and bar charts
//! - `sample`: Demo data for a fresh session
//! - `config`: Settings file and path resolution
//! - `cli`: Command handlers for the `finman` binary
//!
//! # Example
//!
//! ```rust
//! use finance_manager::config::Settings;
//! use finance_manager::models::{Category, Money};
//! use finance_manager::reports::{Report, View};
//! use finance_manager::session::Session;
//!
//! let mut session = Session::new(Settings::default());
//! session.set_budget(Category::Food, Money::from_units(200)).unwrap();
//! session.record_spending(Category::Food, Money::from_units(210)).unwrap();
//!
//! if let Report::Budget(report) = session.render(View::Budget).unwrap() {
//!     assert_eq!(report.alert_message(), "Budget exceeded for: Food");
//! }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod reports;
pub mod sample;
pub mod session;

pub use error::{DomainError, FinanceError};
