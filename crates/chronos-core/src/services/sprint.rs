//! Open sprint issues

use super::jira::{JiraClient, JiraIssue};
use crate::config::ChronosConfig;
use crate::error::Result;
use crate::models::{SprintIssue, UNASSIGNED};

const OPEN_SPRINTS_QUERY: &str = "resolution = Unresolved AND sprint in openSprints()";

impl From<&JiraIssue> for SprintIssue {
    fn from(issue: &JiraIssue) -> Self {
        let assignee = issue
            .fields
            .assignee
            .as_ref()
            .and_then(|user| user.email_address.clone())
            .unwrap_or_else(|| UNASSIGNED.to_string());

        Self {
            issue: issue.key.clone(),
            summary: issue.fields.summary.clone().unwrap_or_default(),
            assignee,
        }
    }
}

/// Keep the issues that are unassigned or assigned to `username`
pub fn keep_users_and_unassigned(issues: Vec<SprintIssue>, username: &str) -> Vec<SprintIssue> {
    issues
        .into_iter()
        .filter(|issue| issue.is_unassigned() || issue.is_assigned_to(username))
        .collect()
}

/// The user's and unassigned unresolved issues in all open sprints
pub async fn users_issues_in_open_sprints(
    client: &JiraClient,
    config: &ChronosConfig,
) -> Result<Vec<SprintIssue>> {
    let jira_issues = client
        .search(OPEN_SPRINTS_QUERY, &["key", "summary", "assignee"], None)
        .await?;

    let all: Vec<SprintIssue> = jira_issues.iter().map(SprintIssue::from).collect();
    let total = all.len();
    let issues = keep_users_and_unassigned(all, &config.jira.username);
    log::info!("[sprint] Keeping {} of {} open sprint issues", issues.len(), total);

    Ok(issues)
}
