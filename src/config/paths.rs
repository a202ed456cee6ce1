//! Path management for finance-manager
//!
//! Only the settings file lives on disk; finance data is never written.
//!
//! ## Path Resolution Order
//!
//! 1. `FINMAN_CONFIG_DIR` environment variable (if set)
//! 2. The platform configuration directory from `directories`
//!    (`~/.config/finance-manager` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinanceError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "FINMAN_CONFIG_DIR";

#[derive(Debug, Clone)]
pub struct FinancePaths {
    base_dir: PathBuf,
}

impl FinancePaths {
    /// Resolve the configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is unset.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "finance-manager")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    FinanceError::Config("Could not determine configuration directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory (tests, `--config-dir`)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            FinanceError::Io(format!("Failed to create config directory: {}", e))
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());
        let paths = FinancePaths::new().unwrap();
        std::env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let paths = FinancePaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.is_dir());
    }
}
