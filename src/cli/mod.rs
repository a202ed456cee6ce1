//! CLI command handlers
//!
//! This module bridges clap argument parsing with the session and reports.

pub mod config;
pub mod shell;
pub mod show;

pub use config::{format_config, handle_init};
pub use shell::{run_shell, ShellCommand};
pub use show::{build_session, handle_show, SessionArgs};
