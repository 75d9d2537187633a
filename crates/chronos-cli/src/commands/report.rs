//! Report command
//!
//! Prints the week/date/issue worklog report, from Jira or from a JSON file.

use anyhow::{Context as _, Result};
use chronos_core::{
    build_report_commands, generate_report, services, JiraClient, ReportStyle, TimeEntry,
};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::output::{print_notice, OutputFormat};
use super::Context;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Print one total per week instead of every worklog
    #[arg(short, long)]
    pub brief: bool,

    /// Show worklog comments (overrides report.show_comments)
    #[arg(short, long)]
    pub comments: bool,

    /// Append the list of issues with their summaries
    #[arg(short, long)]
    pub issues: bool,

    /// Read time entries from a JSON file instead of Jira
    #[arg(long)]
    pub input: Option<PathBuf>,
}

pub async fn execute(ctx: &Context, args: ReportArgs) -> Result<()> {
    let (entries, config) = match &args.input {
        Some(path) => (read_entries(path)?, ctx.load_config_or_default()?),
        None => {
            let config = ctx.load_config()?;
            let client = JiraClient::from_config(&config.jira)?;
            let entries = services::fetch_time_entries(&client, &config)
                .await
                .context("Failed to fetch worklogs from Jira")?;
            (entries, config)
        }
    };

    if ctx.format == OutputFormat::Json {
        let commands = build_report_commands(&entries);
        println!("{}", serde_json::to_string_pretty(&commands)?);
        return Ok(());
    }

    if entries.is_empty() {
        print_notice("No time entries found.", ctx.quiet);
        return Ok(());
    }

    let mut options = config.report.render_options();
    options.show_comments |= args.comments;
    options.show_issue_summaries |= args.issues;

    print!("{}", generate_report(&entries, report_style(&args), &options));

    Ok(())
}

fn report_style(args: &ReportArgs) -> ReportStyle {
    if args.brief {
        ReportStyle::Brief
    } else {
        ReportStyle::Full
    }
}

/// Load a JSON array of time entries
fn read_entries(path: &Path) -> Result<Vec<TimeEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read time entries from {}", path.display()))?;
    let entries: Vec<TimeEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid time entries in {}", path.display()))?;

    log::info!("Loaded {} time entries from {}", entries.len(), path.display());
    Ok(entries)
}
