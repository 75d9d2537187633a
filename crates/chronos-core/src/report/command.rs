//! Report commands
//!
//! Low-level presentation instructions produced by the builder and consumed by
//! the renderers.

use serde::Serialize;

/// A single report-structure transition or content line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    ClearWeek,
    ClearDate,
    ClearIssue,
    NewWeek { week: u32 },
    NewDate { date: String },
    NewIssue { issue: String, summary: String },
    SummaryDate,
    SummaryWeek,
    /// Note the hours of one time entry in every open scope
    NoteHours { hours: f64, comment: Option<String> },
    PrintNewIssue,
    /// Continuation line for another entry on the issue just printed
    PrintSameIssue,
    IssueSummaryLine { issue: String, summary: String },
}

impl Command {
    /// Hours carried by a `NoteHours` command
    pub fn noted_hours(&self) -> Option<f64> {
        match self {
            Command::NoteHours { hours, .. } => Some(*hours),
            _ => None,
        }
    }
}
