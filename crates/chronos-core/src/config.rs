//! Configuration
//!
//! Jira connection details and report preferences, stored as YAML in the
//! user's home folder (`~/chronos.yaml`) unless `CHRONOS_CONFIG` points elsewhere.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::report::RenderOptions;

pub const DEFAULT_URL: &str = "https://myJira.atlassian.net";
pub const DEFAULT_MAIL: &str = "myLogin@example.com";
pub const DEFAULT_API_KEY: &str = "1234ABCD";
pub const DEFAULT_USERNAME: &str = "myUserName";
pub const DEFAULT_WEEKS_LOOKBACK: u32 = 3;
pub const DEFAULT_AUTH_TYPE: &str = "basic";

pub const CONFIG_FILE_NAME: &str = "chronos.yaml";
pub const CONFIG_ENV_VAR: &str = "CHRONOS_CONFIG";

/// Everything needed to talk to the Jira instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JiraConfig {
    pub url: String,
    pub mail: String,
    #[serde(rename = "apikey")]
    pub api_key: String,
    pub username: String,
    #[serde(rename = "weekslookback", default = "default_weeks_lookback")]
    pub weeks_lookback: u32,
    /// `basic` (mail + API key, Jira Cloud) or `pat` (personal access token, Jira Server/DC)
    #[serde(rename = "authtype", default = "default_auth_type")]
    pub auth_type: String,
}

fn default_weeks_lookback() -> u32 {
    DEFAULT_WEEKS_LOOKBACK
}

fn default_auth_type() -> String {
    DEFAULT_AUTH_TYPE.to_string()
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            mail: DEFAULT_MAIL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            weeks_lookback: DEFAULT_WEEKS_LOOKBACK,
            auth_type: default_auth_type(),
        }
    }
}

/// Report presentation preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub show_comments: bool,
    #[serde(default)]
    pub show_issue_summaries: bool,
}

impl ReportConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_comments: self.show_comments,
            show_issue_summaries: self.show_issue_summaries,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChronosConfig {
    pub jira: JiraConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl ChronosConfig {
    /// Config built from credentials given on the command line
    pub fn from_command_line(url: &str, mail: &str, username: &str, api_key: &str) -> Self {
        Self {
            jira: JiraConfig {
                url: url.to_string(),
                mail: mail.to_string(),
                api_key: api_key.to_string(),
                username: username.to_string(),
                weeks_lookback: DEFAULT_WEEKS_LOOKBACK,
                auth_type: default_auth_type(),
            },
            report: ReportConfig::default(),
        }
    }

    /// Read a YAML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::not_found(format!("config file {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: ChronosConfig = serde_yaml::from_str(&raw)?;
        log::debug!("[config] Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Write this configuration as YAML, readable only by the owner
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = serde_yaml::to_string(self)?;
        std::fs::write(path, data)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        log::info!("[config] Wrote configuration to {}", path.display());
        Ok(())
    }
}

/// Resolve the config file path: `CHRONOS_CONFIG` if set, else `~/chronos.yaml`
pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Ok(expand_path(&path));
    }

    let home = dirs::home_dir().ok_or_else(|| Error::config("Could not determine home directory"))?;
    Ok(home.join(CONFIG_FILE_NAME))
}

/// Expand a leading `~` in a user-supplied path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// First day of the lookback window, counted from today
pub fn calc_passed_date(config: &ChronosConfig) -> NaiveDate {
    let today = chrono::Local::now().date_naive();
    calc_passed_date_from(today, config.jira.weeks_lookback)
}

/// First day of the lookback window: `weeks_lookback` whole weeks before the
/// Monday of `from`'s week. Sundays count as the day before Monday.
pub fn calc_passed_date_from(from: NaiveDate, weeks_lookback: u32) -> NaiveDate {
    let weekday = i64::from(from.weekday().num_days_from_sunday()) - 1;
    let days = i64::from(weeks_lookback) * 7 + weekday;
    from - Duration::days(days)
}
