//! Expense Report
//!
//! The expense table, its category totals and a bar chart of spending by
//! category.

use std::collections::BTreeMap;

use tabled::Tabled;

use crate::config::Settings;
use crate::display::{bar_chart, format_percentage, format_table, Bar};
use crate::engine::{category_totals, total_spent};
use crate::error::DomainResult;
use crate::models::{Category, Expense, Money};

#[derive(Debug, Clone)]
pub struct ExpenseReport {
    /// All expenses, in the order they were added
    pub expenses: Vec<Expense>,
    pub totals: BTreeMap<Category, Money>,
    pub total: Money,
}

#[derive(Tabled)]
struct ExpenseLine {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: Category,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct CategoryLine {
    #[tabled(rename = "Category")]
    category: Category,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

impl ExpenseReport {
    pub fn generate(expenses: &[Expense]) -> DomainResult<Self> {
        Ok(Self {
            expenses: expenses.to_vec(),
            totals: category_totals(expenses)?,
            total: total_spent(expenses)?,
        })
    }

    /// Share of total spending for a category, if anything was spent at all
    pub fn share(&self, category: Category) -> Option<f64> {
        let amount = self.totals.get(&category)?;
        crate::engine::percentage(*amount, self.total, "category share").ok()
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        if self.expenses.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let mut output = String::new();

        // Most recent rows only; the sample table alone is 100 lines
        let shown = settings.expense_rows.min(self.expenses.len());
        let hidden = self.expenses.len() - shown;
        let recent: Vec<ExpenseLine> = self.expenses[hidden..]
            .iter()
            .map(|e| ExpenseLine {
                date: settings.date(e.date),
                category: e.category,
                amount: settings.money(e.amount),
            })
            .collect();

        output.push_str("\nExpense Data\n");
        if !recent.is_empty() {
            output.push_str(&format_table(&recent));
            output.push('\n');
        }
        if hidden > 0 {
            output.push_str(&format!("... and {} earlier expenses\n", hidden));
        }

        let by_category: Vec<CategoryLine> = self
            .totals
            .iter()
            .map(|(category, amount)| CategoryLine {
                category: *category,
                amount: settings.money(*amount),
                share: self
                    .share(*category)
                    .map(format_percentage)
                    .unwrap_or_else(|| "n/a".to_string()),
            })
            .collect();

        output.push_str("\nExpense by Category\n");
        output.push_str(&format_table(&by_category));
        output.push('\n');

        let bars: Vec<Bar> = self
            .totals
            .iter()
            .map(|(category, amount)| {
                Bar::new(category.name(), amount.as_f64(), settings.money(*amount))
            })
            .collect();
        output.push('\n');
        output.push_str(&bar_chart(&bars, None, settings.chart_width));

        output.push_str(&format!(
            "\nTotal: {} across {} expenses\n",
            settings.money(self.total),
            self.expenses.len()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(day: u32, cents: i64, category: Category) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            Money::from_cents(cents),
            category,
        )
        .unwrap()
    }

    #[test]
    fn test_generate() {
        let report = ExpenseReport::generate(&[
            expense(1, 3000, Category::Food),
            expense(2, 1000, Category::Bills),
            expense(3, 1000, Category::Food),
        ])
        .unwrap();
        assert_eq!(report.total.cents(), 5000);
        assert_eq!(report.totals[&Category::Food].cents(), 4000);
        assert_eq!(report.share(Category::Food), Some(80.0));
        assert_eq!(report.share(Category::Shopping), None);
    }

    #[test]
    fn test_zero_total_has_no_share() {
        let report = ExpenseReport::generate(&[expense(1, 0, Category::Food)]).unwrap();
        assert_eq!(report.share(Category::Food), None);
        let text = report.format_terminal(&Settings::default());
        assert!(text.contains("n/a"));
    }

    #[test]
    fn test_format_terminal_limits_rows() {
        let expenses: Vec<Expense> = (1..=15)
            .map(|d| expense(d, 1000, Category::Shopping))
            .collect();
        let mut settings = Settings::default();
        settings.expense_rows = 4;

        let text = ExpenseReport::generate(&expenses)
            .unwrap()
            .format_terminal(&settings);
        assert!(text.contains("... and 11 earlier expenses"));
        assert!(text.contains("2023-01-15"));
        assert!(!text.contains("2023-01-11"));
        assert!(text.contains("Total: $150.00 across 15 expenses"));
        assert!(text.contains("100.0%"));
    }

    #[test]
    fn test_empty_report() {
        let text = ExpenseReport::generate(&[])
            .unwrap()
            .format_terminal(&Settings::default());
        assert_eq!(text, "No expenses recorded.\n");
    }
}
