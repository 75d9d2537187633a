//! Jira REST API client
//!
//! Issue search (with worklogs/assignees) and worklog creation against the
//! Jira REST API v2.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

use crate::config::JiraConfig;
use crate::error::{Error, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const SEARCH_PAGE_SIZE: usize = 1000;

/// Jira user information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JiraUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "emailAddress", default)]
    pub email_address: Option<String>,
}

/// Jira issue as returned by search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    #[serde(default)]
    pub fields: JiraIssueFields,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JiraIssueFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub assignee: Option<JiraUser>,
    #[serde(default)]
    pub worklog: Option<JiraWorklogs>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JiraWorklogs {
    #[serde(default)]
    pub worklogs: Vec<JiraWorklog>,
}

/// One worklog record on an issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraWorklog {
    #[serde(default)]
    pub author: Option<JiraUser>,
    pub created: String,
    #[serde(rename = "timeSpentSeconds", default)]
    pub time_spent_seconds: i64,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total: usize,
    #[serde(default)]
    issues: Vec<JiraIssue>,
}

/// Worklog creation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorklogResponse {
    pub id: Option<String>,
}

/// Authentication type for Jira
#[derive(Debug, Clone, PartialEq)]
pub enum JiraAuthType {
    /// Basic Auth with email:token (Jira Cloud)
    Basic,
    /// Personal Access Token (Jira Server/DC)
    Pat,
}

impl From<&str> for JiraAuthType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pat" => JiraAuthType::Pat,
            _ => JiraAuthType::Basic,
        }
    }
}

/// Jira REST API client
pub struct JiraClient {
    base_url: String,
    client: Client,
}

impl JiraClient {
    /// Create a new Jira client
    pub fn new(base_url: &str, token: &str, email: Option<&str>, auth_type: JiraAuthType) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&authorization_value(token, email, &auth_type)?)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Client for the configured instance; `authtype` selects Basic or PAT auth
    pub fn from_config(config: &JiraConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(Error::config("Jira URL is not set"));
        }

        let auth_type = JiraAuthType::from(config.auth_type.as_str());
        log::debug!("[jira] Using {:?} auth against {}", auth_type, config.url);
        Self::new(&config.url, &config.api_key, Some(&config.mail), auth_type)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a JQL search and collect every page of results
    pub async fn search(&self, jql: &str, fields: &[&str], expand: Option<&str>) -> Result<Vec<JiraIssue>> {
        let url = format!("{}/rest/api/2/search", self.base_url);
        let fields = fields.join(",");
        let mut issues = Vec::new();

        loop {
            let mut query = vec![
                ("jql", jql.to_string()),
                ("fields", fields.clone()),
                ("startAt", issues.len().to_string()),
                ("maxResults", SEARCH_PAGE_SIZE.to_string()),
            ];
            if let Some(expand) = expand {
                query.push(("expand", expand.to_string()));
            }

            let response = self.client.get(&url).query(&query).send().await?;
            let page: SearchResponse = check_status(response).await?.json().await?;

            log::debug!(
                "[jira] Search page returned {} of {} issues",
                page.issues.len(),
                page.total
            );

            let received = page.issues.len();
            issues.extend(page.issues);
            if received == 0 || issues.len() >= page.total {
                break;
            }
        }

        Ok(issues)
    }

    /// Add a worklog to an issue; `time_spent` uses Jira duration syntax ("1h 30m")
    pub async fn add_worklog(
        &self,
        issue_key: &str,
        time_spent: &str,
        comment: Option<&str>,
    ) -> Result<WorklogResponse> {
        let url = format!("{}/rest/api/2/issue/{}/worklog", self.base_url, issue_key);

        let mut payload = serde_json::json!({ "timeSpent": time_spent });
        if let Some(comment) = comment.filter(|c| !c.is_empty()) {
            payload["comment"] = serde_json::Value::String(comment.to_string());
        }

        let response = self.client.post(&url).json(&payload).send().await?;
        let result: serde_json::Value = check_status(response).await?.json().await?;

        Ok(WorklogResponse {
            id: result.get("id").and_then(|v| v.as_str().map(String::from)),
        })
    }
}

fn authorization_value(token: &str, email: Option<&str>, auth_type: &JiraAuthType) -> Result<String> {
    match auth_type {
        JiraAuthType::Pat => Ok(format!("Bearer {}", token)),
        JiraAuthType::Basic => {
            let email = email.ok_or_else(|| Error::config("Email required for Basic auth"))?;
            let credentials = format!("{}:{}", email, token);
            Ok(format!("Basic {}", BASE64.encode(credentials.as_bytes())))
        }
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(Error::jira(status.as_u16(), text));
    }
    Ok(response)
}
