//! Configuration module for finance-manager
//!
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::{SampleSettings, Settings};
