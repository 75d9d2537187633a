//! Chronos CLI - Jira worklog reports
//!
//! A command-line interface for reviewing logged work, logging new work and
//! listing open sprint issues.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chronos")]
#[command(author, version, about = "Jira worklog reporting CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Config file path (default: ~/chronos.yaml)
    #[arg(long = "config", env = "CHRONOS_CONFIG", global = true)]
    config_file: Option<String>,

    /// Jira instance, e.g. https://myjira.atlassian.net
    #[arg(long, env = "CHRONOS_URL", global = true)]
    url: Option<String>,

    /// Mail address used to log in to Jira
    #[arg(long, env = "CHRONOS_MAIL", global = true)]
    mail: Option<String>,

    /// Jira username
    #[arg(long, env = "CHRONOS_USERNAME", global = true)]
    username: Option<String>,

    /// Jira API key
    #[arg(long = "api-key", env = "CHRONOS_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show logged work grouped by week, date and issue
    Report(commands::report::ReportArgs),

    /// Log time on an issue
    Log(commands::worklog::LogArgs),

    /// Show your and unassigned issues in the open sprints
    Sprint,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config_path = match &cli.config_file {
        Some(path) => chronos_core::config::expand_path(path),
        None => chronos_core::config::default_config_path()?,
    };

    // Create context for commands
    let ctx = commands::Context {
        config_path,
        overrides: commands::JiraOverrides {
            url: cli.url,
            mail: cli.mail,
            username: cli.username,
            api_key: cli.api_key,
        },
        format: cli.format,
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command {
        Commands::Report(args) => commands::report::execute(&ctx, args).await,
        Commands::Log(args) => commands::worklog::execute(&ctx, args).await,
        Commands::Sprint => commands::sprint::execute(&ctx).await,
        Commands::Config { action } => commands::config::execute(&ctx, action).await,
    }
}
