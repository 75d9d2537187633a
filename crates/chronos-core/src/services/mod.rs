//! Services module

pub mod collector;
pub mod jira;
pub mod sprint;
pub mod worklog;

pub use collector::{extract_time_entries, fetch_time_entries, filter_time_entries, worklog_to_time_entry};
pub use jira::{JiraAuthType, JiraClient, JiraIssue, JiraUser, JiraWorklog, WorklogResponse};
pub use sprint::{keep_users_and_unassigned, users_issues_in_open_sprints};
pub use worklog::{format_time_spent, log_work};
