//! # chronos-core
//!
//! Core logic for chronos - Jira worklog reports.
//!
//! This crate provides:
//! - Data models (`models` module)
//! - The report pipeline: command builder and renderers (`report` module)
//! - Configuration loading (`config` module)
//! - Jira services: worklog collection, sprint issues, work logging (`services` module)
//! - Unified error handling (`error` module)

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod services;

// Re-exports for convenience
pub use config::{ChronosConfig, JiraConfig, ReportConfig};
pub use error::{Error, Result};
pub use models::{SprintIssue, TimeEntry, WorklogRequest};
pub use report::{
    build_report_commands, generate_report, render_brief, render_full, Command, RenderOptions,
    ReportStyle,
};
pub use services::JiraClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
