//! Budget Report
//!
//! Limit, spending and remaining amount per category plus the alert line.

use std::collections::BTreeSet;

use tabled::Tabled;

use crate::config::Settings;
use crate::display::format_table;
use crate::engine::{budget_alerts, budget_remaining};
use crate::models::{BudgetLimit, Category, Money};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetRow {
    pub category: Category,
    pub limit: Money,
    pub spent: Money,
    pub remaining: Money,
}

#[derive(Debug, Clone)]
pub struct BudgetReport {
    pub rows: Vec<BudgetRow>,
    pub alerts: BTreeSet<Category>,
}

#[derive(Tabled)]
struct BudgetLine {
    #[tabled(rename = "Category")]
    category: Category,
    #[tabled(rename = "Budget")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl BudgetReport {
    pub fn generate(budgets: &[BudgetLimit]) -> Self {
        let rows = budgets
            .iter()
            .map(|b| BudgetRow {
                category: b.category,
                limit: b.limit,
                spent: b.spent,
                remaining: budget_remaining(b),
            })
            .collect();

        Self {
            rows,
            alerts: budget_alerts(budgets),
        }
    }

    pub fn alert_message(&self) -> String {
        if self.alerts.is_empty() {
            "No budget limits exceeded".to_string()
        } else {
            let names: Vec<&str> = self.alerts.iter().map(|c| c.name()).collect();
            format!("Budget exceeded for: {}", names.join(", "))
        }
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        if self.rows.is_empty() {
            return "No budget limits set.\n".to_string();
        }

        let lines: Vec<BudgetLine> = self
            .rows
            .iter()
            .map(|row| BudgetLine {
                category: row.category,
                limit: settings.money(row.limit),
                spent: settings.money(row.spent),
                remaining: settings.money(row.remaining),
                status: if self.alerts.contains(&row.category) {
                    "OVER"
                } else {
                    "ok"
                },
            })
            .collect();

        let mut output = String::new();
        output.push_str("\nCurrent Budget Status\n");
        output.push_str(&format_table(&lines));
        output.push_str("\n\n");
        output.push_str(&self.alert_message());
        output.push('\n');
        output
    }
}
