//! Goal Report
//!
//! Progress toward each savings goal, with the monthly amount still needed to
//! make the deadline.

use chrono::NaiveDate;
use tabled::Tabled;
use tracing::warn;

use crate::config::Settings;
use crate::display::{bar_chart, format_percentage, format_table, Bar};
use crate::engine::{goal_progress, goal_remaining, monthly_contribution};
use crate::models::{FinancialGoal, Money};

#[derive(Debug, Clone, PartialEq)]
pub struct GoalRow {
    pub name: String,
    pub target_amount: Money,
    pub saved_amount: Money,
    pub target_date: NaiveDate,
    /// `None` when the target is zero
    pub progress: Option<f64>,
    pub remaining: Money,
    pub monthly_needed: Money,
}

#[derive(Debug, Clone)]
pub struct GoalReport {
    pub as_of: NaiveDate,
    pub rows: Vec<GoalRow>,
}

#[derive(Tabled)]
struct GoalLine {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target Date")]
    target_date: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Monthly Needed")]
    monthly: String,
}

impl GoalReport {
    /// Build the report as of a given day
    ///
    /// With `cap_progress`, progress beyond the target is reported as 100.
    pub fn generate(goals: &[FinancialGoal], as_of: NaiveDate, cap_progress: bool) -> Self {
        let rows = goals
            .iter()
            .map(|goal| {
                let progress = match goal_progress(goal) {
                    Ok(pct) if cap_progress => Some(pct.min(100.0)),
                    Ok(pct) => Some(pct),
                    Err(e) => {
                        warn!(goal = %goal.name, error = %e, "goal progress unavailable");
                        None
                    }
                };
                GoalRow {
                    name: goal.name.clone(),
                    target_amount: goal.target_amount,
                    saved_amount: goal.saved_amount,
                    target_date: goal.target_date,
                    progress,
                    remaining: goal_remaining(goal),
                    monthly_needed: monthly_contribution(goal, as_of),
                }
            })
            .collect();

        Self { as_of, rows }
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        if self.rows.is_empty() {
            return "No financial goals set.\n".to_string();
        }

        let lines: Vec<GoalLine> = self
            .rows
            .iter()
            .map(|row| GoalLine {
                name: row.name.clone(),
                target: settings.money(row.target_amount),
                saved: settings.money(row.saved_amount),
                target_date: settings.date(row.target_date),
                progress: row
                    .progress
                    .map(format_percentage)
                    .unwrap_or_else(|| "n/a".to_string()),
                monthly: settings.money(row.monthly_needed),
            })
            .collect();

        let mut output = String::new();
        output.push_str("\nCurrent Goals\n");
        output.push_str(&format_table(&lines));
        output.push('\n');

        let bars: Vec<Bar> = self
            .rows
            .iter()
            .filter_map(|row| {
                row.progress
                    .map(|pct| Bar::new(row.name.clone(), pct, format_percentage(pct)))
            })
            .collect();
        if !bars.is_empty() {
            // Bars fill at 100% unless some goal is already past its target
            let scale = bars.iter().map(|b| b.value).fold(100.0_f64, f64::max);
            output.push_str("\nGoal Progress\n");
            output.push_str(&bar_chart(&bars, Some(scale), settings.chart_width));
        }

        output.push_str(&format!("\nAs of {}\n", settings.date(self.as_of)));
        output
    }
}
