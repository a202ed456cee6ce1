//! Table rendering via `tabled`

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

/// Render rows as a rounded table with every column after the first
/// right-aligned
pub fn format_table<T: Tabled>(rows: &[T]) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    table.to_string()
}
