//! Data models for chronos

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format used for time entry dates (lexically sortable)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Assignee placeholder for sprint issues nobody has picked up
pub const UNASSIGNED: &str = "Unassigned";

/// A single worklog that was entered in Jira
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub issue: String,
    pub summary: String,
    #[serde(default)]
    pub employee: String,
    #[serde(default)]
    pub email_address: String,
    pub date: String, // YYYY-MM-DD
    pub week: u32,    // ISO week of `date`
    pub hours: f64,
    #[serde(default)]
    pub comment: Option<String>,
}

impl TimeEntry {
    /// Create an entry for a calendar date, deriving the date string and ISO week
    pub fn from_date(
        issue: impl Into<String>,
        summary: impl Into<String>,
        date: NaiveDate,
        hours: f64,
        comment: Option<String>,
    ) -> Self {
        Self {
            issue: issue.into(),
            summary: summary.into(),
            employee: String::new(),
            email_address: String::new(),
            date: date.format(DATE_FORMAT).to_string(),
            week: date.iso_week().week(),
            hours,
            comment,
        }
    }

    /// Attach the worklog author
    pub fn with_author(mut self, employee: impl Into<String>, email_address: impl Into<String>) -> Self {
        self.employee = employee.into();
        self.email_address = email_address.into();
        self
    }

    /// Whether this entry was logged by `username` (exact name or email prefix)
    pub fn is_logged_by(&self, username: &str) -> bool {
        self.employee == username || self.email_address.starts_with(username)
    }
}

/// An issue in one of the currently open sprints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintIssue {
    pub issue: String,
    pub summary: String,
    pub assignee: String,
}

impl SprintIssue {
    pub fn is_unassigned(&self) -> bool {
        self.assignee == UNASSIGNED
    }

    /// Whether the issue is assigned to `username` (exact match or email prefix)
    pub fn is_assigned_to(&self, username: &str) -> bool {
        self.assignee == username || self.assignee.starts_with(username)
    }
}

/// Work to be logged against an issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorklogRequest {
    pub issue_key: String,
    pub hours: u32,
    pub minutes: u32,
    #[serde(default)]
    pub comment: Option<String>,
}
