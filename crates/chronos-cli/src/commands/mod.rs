//! CLI commands module
//!
//! Contains all CLI command implementations.

pub mod config;
pub mod report;
pub mod sprint;
pub mod worklog;

use anyhow::{Context as _, Result};
use chronos_core::{ChronosConfig, Error};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Jira credentials given on the command line
#[derive(Debug, Clone, Default)]
pub struct JiraOverrides {
    pub url: Option<String>,
    pub mail: Option<String>,
    pub username: Option<String>,
    pub api_key: Option<String>,
}

impl JiraOverrides {
    /// A full config when every credential was supplied
    pub fn to_config(&self) -> Option<ChronosConfig> {
        match (&self.url, &self.mail, &self.username, &self.api_key) {
            (Some(url), Some(mail), Some(username), Some(api_key))
                if !url.is_empty() && !mail.is_empty() && !username.is_empty() && !api_key.is_empty() =>
            {
                Some(ChronosConfig::from_command_line(url, mail, username, api_key))
            }
            _ => None,
        }
    }
}

/// Shared context for all commands
pub struct Context {
    pub config_path: PathBuf,
    pub overrides: JiraOverrides,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// Effective configuration: command-line credentials, else the config file
    pub fn load_config(&self) -> Result<ChronosConfig> {
        if let Some(config) = self.overrides.to_config() {
            log::debug!("Using Jira credentials from the command line");
            return Ok(config);
        }

        ChronosConfig::load(&self.config_path).with_context(|| {
            format!(
                "Could not read {}. Run 'chronos config init' to create an example configuration.",
                self.config_path.display()
            )
        })
    }

    /// Like [`Context::load_config`], but a missing config file yields the defaults
    pub fn load_config_or_default(&self) -> Result<ChronosConfig> {
        if let Some(config) = self.overrides.to_config() {
            return Ok(config);
        }

        match ChronosConfig::load(&self.config_path) {
            Ok(config) => Ok(config),
            Err(Error::NotFound(_)) => {
                log::debug!("No config at {}, using defaults", self.config_path.display());
                Ok(ChronosConfig::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
