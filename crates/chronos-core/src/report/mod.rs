//! Worklog report
//!
//! Two-phase pipeline: time entries are sorted and diffed into [`Command`]s,
//! which a renderer then turns into text.

mod builder;
mod command;
mod render;

pub use builder::build_report_commands;
pub use command::Command;
pub use render::{render_brief, render_full, RenderOptions};

use crate::models::TimeEntry;

/// Report verbosity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportStyle {
    #[default]
    Full,
    Brief,
}

/// Build and render a report in one go
pub fn generate_report(entries: &[TimeEntry], style: ReportStyle, options: &RenderOptions) -> String {
    let commands = build_report_commands(entries);
    match style {
        ReportStyle::Full => render_full(&commands, options),
        ReportStyle::Brief => render_brief(&commands),
    }
}
