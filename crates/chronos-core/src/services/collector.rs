//! Time entry collector
//!
//! Fetches the user's recent worklogs from Jira and flattens them into
//! [`TimeEntry`] records.

use chrono::{DateTime, NaiveDate};

use super::jira::{JiraClient, JiraIssue, JiraWorklog};
use crate::config::{calc_passed_date, ChronosConfig};
use crate::error::{Error, Result};
use crate::models::{TimeEntry, DATE_FORMAT};

/// Timestamp format of worklog `created` fields, e.g. `2018-01-01T10:15:00.000+0000`
const WORKLOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Convert one worklog on an issue into a time entry dated by the worklog's creation time
pub fn worklog_to_time_entry(issue: &JiraIssue, worklog: &JiraWorklog) -> Result<TimeEntry> {
    let created = DateTime::parse_from_str(&worklog.created, WORKLOG_TIMESTAMP_FORMAT).map_err(|e| {
        Error::validation(format!("invalid worklog timestamp '{}': {}", worklog.created, e))
    })?;

    let author = worklog.author.clone().unwrap_or_default();
    let entry = TimeEntry::from_date(
        issue.key.clone(),
        issue.fields.summary.clone().unwrap_or_default(),
        created.date_naive(),
        worklog.time_spent_seconds as f64 / 3600.0,
        worklog.comment.clone(),
    )
    .with_author(
        author.name.unwrap_or_default(),
        author.email_address.unwrap_or_default(),
    );

    Ok(entry)
}

/// Flatten all worklogs of all issues into time entries.
/// Worklogs with unreadable timestamps are skipped.
pub fn extract_time_entries(issues: &[JiraIssue]) -> Vec<TimeEntry> {
    let mut entries = Vec::new();

    for issue in issues {
        let Some(worklog) = &issue.fields.worklog else {
            continue;
        };
        for record in &worklog.worklogs {
            match worklog_to_time_entry(issue, record) {
                Ok(entry) => entries.push(entry),
                Err(e) => log::warn!("[collector] Skipping worklog on {}: {}", issue.key, e),
            }
        }
    }

    log::info!(
        "[collector] Extracted {} time entries from {} issues",
        entries.len(),
        issues.len()
    );
    entries
}

/// Keep the entries matching `predicate`
pub fn filter_time_entries<F>(entries: Vec<TimeEntry>, predicate: F) -> Vec<TimeEntry>
where
    F: Fn(&TimeEntry) -> bool,
{
    entries.into_iter().filter(|entry| predicate(entry)).collect()
}

/// JQL selecting issues the user logged work on since `since`
pub fn worklog_query(since: NaiveDate, username: &str) -> String {
    format!(
        "worklogDate >= {} && worklogAuthor = {}",
        since.format(DATE_FORMAT),
        username
    )
}

/// Fetch the configured user's time entries within the lookback window
pub async fn fetch_time_entries(client: &JiraClient, config: &ChronosConfig) -> Result<Vec<TimeEntry>> {
    let since = calc_passed_date(config);
    let username = &config.jira.username;
    log::info!(
        "[collector] Query {} from {} for user {}",
        client.base_url(),
        since,
        username
    );

    let issues = client
        .search(
            &worklog_query(since, username),
            &["key", "summary", "worklog"],
            Some("worklog"),
        )
        .await?;
    log::info!("[collector] Jira returned {} issues", issues.len());

    let entries = extract_time_entries(&issues);
    Ok(filter_time_entries(entries, |entry| entry.is_logged_by(username)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::jira::{JiraIssueFields, JiraUser, JiraWorklogs};

    fn worklog(author: &str, created: &str, seconds: i64) -> JiraWorklog {
        JiraWorklog {
            author: Some(JiraUser {
                name: Some(author.to_string()),
                display_name: None,
                email_address: Some(format!("{}@example.com", author)),
            }),
            created: created.to_string(),
            time_spent_seconds: seconds,
            comment: Some("My Comment".to_string()),
        }
    }

    fn issue(key: &str, worklogs: Vec<JiraWorklog>) -> JiraIssue {
        JiraIssue {
            key: key.to_string(),
            fields: JiraIssueFields {
                summary: Some("Summary of the issue".to_string()),
                assignee: None,
                worklog: Some(JiraWorklogs { worklogs }),
            },
        }
    }

    #[test]
    fn test_worklog_to_time_entry() {
        let issue = issue("AA-1234", vec![]);
        let entry =
            worklog_to_time_entry(&issue, &worklog("maxx", "2018-01-08T10:15:00.000+0000", 5400)).unwrap();

        assert_eq!(entry.issue, "AA-1234");
        assert_eq!(entry.summary, "Summary of the issue");
        assert_eq!(entry.date, "2018-01-08");
        assert_eq!(entry.week, 2);
        assert_eq!(entry.hours, 1.5);
        assert_eq!(entry.employee, "maxx");
        assert_eq!(entry.email_address, "maxx@example.com");
        assert_eq!(entry.comment.as_deref(), Some("My Comment"));
    }

    #[test]
    fn test_worklog_date_uses_its_own_offset() {
        let issue = issue("AA-1", vec![]);
        let entry =
            worklog_to_time_entry(&issue, &worklog("maxx", "2018-01-01T23:30:00.000+0100", 3600)).unwrap();
        assert_eq!(entry.date, "2018-01-01");
    }

    #[test]
    fn test_worklog_bad_timestamp() {
        let issue = issue("AA-1", vec![]);
        let err = worklog_to_time_entry(&issue, &worklog("maxx", "yesterday", 3600)).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_extract_time_entries_skips_bad_worklogs() {
        let issues = vec![
            issue(
                "AA-1",
                vec![
                    worklog("maxx", "2018-01-01T10:00:00.000+0000", 3600),
                    worklog("maxx", "garbage", 3600),
                ],
            ),
            issue("AA-2", vec![worklog("anna", "2018-01-02T10:00:00.000+0000", 1800)]),
            JiraIssue {
                key: "AA-3".to_string(),
                fields: JiraIssueFields::default(),
            },
        ];

        let entries = extract_time_entries(&issues);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].hours, 0.5);
    }

    #[test]
    fn test_filter_by_author() {
        let issues = vec![issue(
            "AA-1",
            vec![
                worklog("maxx", "2018-01-01T10:00:00.000+0000", 3600),
                worklog("anna", "2018-01-01T11:00:00.000+0000", 3600),
            ],
        )];

        let entries = filter_time_entries(extract_time_entries(&issues), |e| e.is_logged_by("maxx"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].employee, "maxx");
    }

    #[test]
    fn test_worklog_query() {
        let since = NaiveDate::from_ymd_opt(2019, 12, 30).unwrap();
        assert_eq!(
            worklog_query(since, "maxx"),
            "worklogDate >= 2019-12-30 && worklogAuthor = maxx"
        );
    }
}
