//! Reports module for finance-manager
//!
//! One report per view. Each report is computed from a session through the
//! engine and knows how to format itself for the terminal.

pub mod budget;
pub mod expenses;
pub mod goals;
pub mod portfolio;

pub use budget::{BudgetReport, BudgetRow};
pub use expenses::ExpenseReport;
pub use goals::{GoalReport, GoalRow};
pub use portfolio::{HoldingRow, PortfolioReport};

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

use crate::config::Settings;
use crate::error::{DomainError, DomainResult};
use crate::session::Session;

/// The four dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum View {
    #[value(alias = "expense")]
    Expenses,
    #[value(alias = "budgets")]
    Budget,
    #[value(alias = "goal")]
    Goals,
    #[value(alias = "portfolio")]
    Investments,
}

impl View {
    pub const ALL: [View; 4] = [Self::Expenses, Self::Budget, Self::Goals, Self::Investments];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Expenses => "Expense Categorization",
            Self::Budget => "Budget Alerts",
            Self::Goals => "Financial Goal Tracking",
            Self::Investments => "Investment Portfolio Management",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Expenses => "expenses",
            Self::Budget => "budget",
            Self::Goals => "goals",
            Self::Investments => "investments",
        };
        f.write_str(name)
    }
}

impl FromStr for View {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <View as ValueEnum>::from_str(s.trim(), true).map_err(|_| DomainError::NotFound {
            entity_type: "View",
            identifier: s.trim().to_string(),
        })
    }
}

/// A rendered view
#[derive(Debug, Clone)]
pub enum Report {
    Expenses(ExpenseReport),
    Budget(BudgetReport),
    Goals(GoalReport),
    Investments(PortfolioReport),
}

impl Report {
    /// Build the report for `view`
    ///
    /// Fails only when a table total is too large to represent.
    pub fn generate(session: &Session, view: View) -> DomainResult<Self> {
        let report = match view {
            View::Expenses => Self::Expenses(ExpenseReport::generate(session.expenses())?),
            View::Budget => Self::Budget(BudgetReport::generate(session.budgets())),
            View::Goals => Self::Goals(GoalReport::generate(
                session.goals(),
                session.as_of(),
                session.settings().cap_goal_progress,
            )),
            View::Investments => {
                Self::Investments(PortfolioReport::generate(session.investments())?)
            }
        };
        Ok(report)
    }

    pub fn view(&self) -> View {
        match self {
            Self::Expenses(_) => View::Expenses,
            Self::Budget(_) => View::Budget,
            Self::Goals(_) => View::Goals,
            Self::Investments(_) => View::Investments,
        }
    }

    /// Format the report for terminal display, title included
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let body = match self {
            Self::Expenses(r) => r.format_terminal(settings),
            Self::Budget(r) => r.format_terminal(settings),
            Self::Goals(r) => r.format_terminal(settings),
            Self::Investments(r) => r.format_terminal(settings),
        };

        let title = self.view().title();
        format!("{}\n{}\n{}", title, "=".repeat(title.chars().count()), body)
    }
}
