//! Config commands
//!
//! Commands for creating and inspecting the chronos configuration file.

use anyhow::{bail, Result};
use chronos_core::ChronosConfig;
use clap::Subcommand;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, print_success};
use super::Context;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write an example configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,
}

/// Config row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub async fn execute(ctx: &Context, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init { force } => init_config(ctx, force),
        ConfigAction::Show => show_config(ctx),
        ConfigAction::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn init_config(ctx: &Context, force: bool) -> Result<()> {
    let path = &ctx.config_path;
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    ChronosConfig::default().save(path)?;
    print_success(
        &format!("Wrote example configuration to {}", path.display()),
        ctx.quiet,
    );
    Ok(())
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    print_output(&config_rows(&config), ctx.format)
}

fn config_rows(config: &ChronosConfig) -> Vec<ConfigRow> {
    let row = |key: &str, value: String| ConfigRow {
        key: key.to_string(),
        value,
    };

    vec![
        row("jira.url", config.jira.url.clone()),
        row("jira.mail", config.jira.mail.clone()),
        row("jira.apikey", mask_token(&config.jira.api_key)),
        row("jira.username", config.jira.username.clone()),
        row("jira.weekslookback", config.jira.weeks_lookback.to_string()),
        row("jira.authtype", config.jira.auth_type.clone()),
        row("report.show_comments", config.report.show_comments.to_string()),
        row(
            "report.show_issue_summaries",
            config.report.show_issue_summaries.to_string(),
        ),
    ]
}

fn mask_token(token: &str) -> String {
    if token.is_empty() {
        "-".to_string()
    } else {
        "****".to_string()
    }
}
