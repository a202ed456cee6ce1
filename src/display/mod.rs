//! Display formatting for terminal output
//!
//! Tables and bar charts shared by the report views.

pub mod chart;
pub mod table;

pub use chart::{bar_chart, format_bar, format_percentage, Bar};
pub use table::format_table;
