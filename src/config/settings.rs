//! User settings for finance-manager
//!
//! Display preferences, logging level, the goal-progress cap and the sample
//! data generator. Every field has a serde default so partial files load.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::FinancePaths;
use crate::error::FinanceError;

/// Upper bound on `sample.expense_count`
pub const MAX_SAMPLE_EXPENSES: usize = 100_000;

/// Upper bound on `chart_width`
pub const MAX_CHART_WIDTH: usize = 200;

/// How a new session is pre-filled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSettings {
    /// Start sessions with the demo tables
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Fixed RNG seed; unset means a different expense table every run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(default = "default_expense_count")]
    pub expense_count: usize,

    /// Date of the first generated expense
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            seed: None,
            expense_count: default_expense_count(),
            start_date: default_start_date(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format used when displaying dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default tracing filter when `FINMAN_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Width of the bar charts, in characters
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Number of most recent expenses listed in the expense view
    #[serde(default = "default_expense_rows")]
    pub expense_rows: usize,

    /// Show goal progress as at most 100%
    #[serde(default)]
    pub cap_goal_progress: bool,

    #[serde(default)]
    pub sample: SampleSettings,
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_chart_width() -> usize {
    30
}

fn default_expense_rows() -> usize {
    10
}

fn default_expense_count() -> usize {
    100
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or(NaiveDate::MIN)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            log_level: default_log_level(),
            chart_width: default_chart_width(),
            expense_rows: default_expense_rows(),
            cap_goal_progress: false,
            sample: SampleSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if there is no file
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            FinanceError::Config(format!("Failed to parse settings file: {}", e))
        })?;
        settings.validate()?;

        debug!(path = %settings_path.display(), "settings loaded");
        Ok(settings)
    }

    /// Reject values that parse but cannot be used
    pub fn validate(&self) -> Result<(), FinanceError> {
        if self.chart_width > MAX_CHART_WIDTH {
            return Err(FinanceError::Config(format!(
                "chart_width must be at most {} (got {})",
                MAX_CHART_WIDTH, self.chart_width
            )));
        }

        let sample = &self.sample;
        if sample.expense_count > MAX_SAMPLE_EXPENSES {
            return Err(FinanceError::Config(format!(
                "sample.expense_count must be at most {} (got {})",
                MAX_SAMPLE_EXPENSES, sample.expense_count
            )));
        }
        if sample
            .start_date
            .checked_add_days(Days::new(sample.expense_count as u64))
            .is_none()
        {
            return Err(FinanceError::Config(format!(
                "sample.start_date {} leaves no room for {} daily expenses",
                sample.start_date, sample.expense_count
            )));
        }
        Ok(())
    }

    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: crate::models::Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date, falling back to ISO if `date_format` is not valid strftime
    pub fn date(&self, date: NaiveDate) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        match write!(out, "{}", date.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => date.to_string(),
        }
    }
}
