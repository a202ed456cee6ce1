//! `config` and `init` commands

use crate::config::{FinancePaths, Settings};
use crate::error::FinanceResult;

/// Describe the resolved paths and the active settings
pub fn format_config(paths: &FinancePaths, settings: &Settings) -> FinanceResult<String> {
    let mut output = String::new();
    output.push_str("finance-manager Configuration\n");
    output.push_str("=============================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!(
        "Settings file:    {}{}\n",
        paths.settings_file().display(),
        if paths.is_initialized() {
            ""
        } else {
            " (not created, using defaults)"
        }
    ));
    output.push_str("\nSettings:\n");
    output.push_str(&serde_json::to_string_pretty(settings)?);
    output.push('\n');
    Ok(output)
}

/// Write the default settings file unless one already exists
pub fn handle_init(paths: &FinancePaths) -> FinanceResult<String> {
    if paths.is_initialized() {
        return Ok(format!(
            "Settings already exist at {}",
            paths.settings_file().display()
        ));
    }

    Settings::default().save(paths)?;
    Ok(format!(
        "Wrote default settings to {}",
        paths.settings_file().display()
    ))
}
