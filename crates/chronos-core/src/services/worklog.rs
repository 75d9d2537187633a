//! Work logging
//!
//! Submits new worklogs to Jira.

use super::jira::{JiraClient, WorklogResponse};
use crate::error::{Error, Result};
use crate::models::WorklogRequest;

/// Jira duration string for a worklog, e.g. `2h 30m`
pub fn format_time_spent(hours: u32, minutes: u32) -> String {
    format!("{}h {}m", hours, minutes)
}

impl WorklogRequest {
    pub fn time_spent(&self) -> String {
        format_time_spent(self.hours, self.minutes)
    }

    /// Reject requests that would log nothing or have no issue
    pub fn validate(&self) -> Result<()> {
        if self.issue_key.trim().is_empty() {
            return Err(Error::validation("an issue key is required"));
        }
        if self.hours == 0 && self.minutes == 0 {
            return Err(Error::validation("hours and/or minutes must be greater than zero"));
        }
        Ok(())
    }
}

/// Log work on an issue
pub async fn log_work(client: &JiraClient, request: &WorklogRequest) -> Result<WorklogResponse> {
    request.validate()?;

    let time_spent = request.time_spent();
    log::info!("[worklog] Logging {} to {}", time_spent, request.issue_key);

    client
        .add_worklog(&request.issue_key, &time_spent, request.comment.as_deref())
        .await
}
