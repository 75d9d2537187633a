//! Sprint command
//!
//! Lists the user's and unassigned issues in the open sprints.

use anyhow::Result;
use chronos_core::{services, JiraClient, SprintIssue};
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;
use super::Context;

/// Sprint issue row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct SprintRow {
    #[tabled(rename = "Issue")]
    pub issue: String,
    #[tabled(rename = "Summary")]
    pub summary: String,
    #[tabled(rename = "Assignee")]
    pub assignee: String,
}

impl From<SprintIssue> for SprintRow {
    fn from(issue: SprintIssue) -> Self {
        Self {
            issue: issue.issue,
            summary: issue.summary,
            assignee: issue.assignee,
        }
    }
}

pub async fn execute(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let client = JiraClient::from_config(&config.jira)?;

    let issues = services::users_issues_in_open_sprints(&client, &config).await?;
    let rows: Vec<SprintRow> = issues.into_iter().map(SprintRow::from).collect();
    print_output(&rows, ctx.format)
}
