//! Portfolio Report
//!
//! Holdings with their gains, the total portfolio value and the allocation
//! chart.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tabled::Tabled;

use crate::config::Settings;
use crate::display::{bar_chart, format_percentage, format_table, Bar};
use crate::engine::{investment_gain, investment_return, portfolio_allocation, portfolio_total};
use crate::error::DomainResult;
use crate::models::{Investment, Money};

#[derive(Debug, Clone, PartialEq)]
pub struct HoldingRow {
    pub name: String,
    pub principal_amount: Money,
    pub date: NaiveDate,
    pub current_value: Money,
    pub gain: Money,
    /// `None` when the principal is zero
    pub return_pct: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct PortfolioReport {
    pub rows: Vec<HoldingRow>,
    pub total: Money,
    /// `None` when the portfolio is empty or worth nothing
    pub allocation: Option<BTreeMap<String, f64>>,
}

#[derive(Tabled)]
struct HoldingLine {
    #[tabled(rename = "Investment")]
    name: String,
    #[tabled(rename = "Amount")]
    principal: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Current Value")]
    value: String,
    #[tabled(rename = "Gain")]
    gain: String,
    #[tabled(rename = "Return")]
    return_pct: String,
}

impl PortfolioReport {
    pub fn generate(investments: &[Investment]) -> DomainResult<Self> {
        let rows = investments
            .iter()
            .map(|i| HoldingRow {
                name: i.name.clone(),
                principal_amount: i.principal_amount,
                date: i.date,
                current_value: i.current_value,
                gain: investment_gain(i),
                return_pct: investment_return(i).ok(),
            })
            .collect();

        let allocation = match portfolio_allocation(investments) {
            Ok(allocation) => Some(allocation),
            Err(e) if e.is_division_by_zero() => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            rows,
            total: portfolio_total(investments)?,
            allocation,
        })
    }

    pub fn format_terminal(&self, settings: &Settings) -> String {
        if self.rows.is_empty() {
            return "No investments recorded.\n".to_string();
        }

        let lines: Vec<HoldingLine> = self
            .rows
            .iter()
            .map(|row| HoldingLine {
                name: row.name.clone(),
                principal: settings.money(row.principal_amount),
                date: settings.date(row.date),
                value: settings.money(row.current_value),
                gain: settings.money(row.gain),
                return_pct: row
                    .return_pct
                    .map(format_percentage)
                    .unwrap_or_else(|| "n/a".to_string()),
            })
            .collect();

        let mut output = String::new();
        output.push_str("\nCurrent Investments\n");
        output.push_str(&format_table(&lines));
        output.push_str("\n\n");
        output.push_str(&format!(
            "Total Portfolio Value: {}\n",
            settings.money(self.total)
        ));

        if let Some(allocation) = &self.allocation {
            // Chart follows table order rather than the map's name order
            let bars: Vec<Bar> = self
                .rows
                .iter()
                .filter_map(|row| {
                    allocation
                        .get(&row.name)
                        .map(|pct| Bar::new(row.name.clone(), *pct, format!("{:.1}%", pct)))
                })
                .collect();
            output.push_str("\nInvestment Distribution\n");
            output.push_str(&bar_chart(&bars, Some(100.0), settings.chart_width));
        }

        output
    }
}
