//! Log work command

use anyhow::Result;
use chronos_core::{services, JiraClient, WorklogRequest};
use clap::Args;

use crate::output::print_success;
use super::Context;

#[derive(Args, Debug)]
pub struct LogArgs {
    /// Issue key to log time on, e.g. AA-1234
    #[arg(short, long)]
    pub issue: String,

    /// Hours to log
    #[arg(long, default_value_t = 0)]
    pub hours: u32,

    /// Minutes to log
    #[arg(short, long, default_value_t = 0)]
    pub minutes: u32,

    /// Worklog comment
    #[arg(short, long)]
    pub comment: Option<String>,
}

pub async fn execute(ctx: &Context, args: LogArgs) -> Result<()> {
    let request = WorklogRequest {
        issue_key: args.issue,
        hours: args.hours,
        minutes: args.minutes,
        comment: args.comment,
    };
    request.validate()?;

    let config = ctx.load_config()?;
    let client = JiraClient::from_config(&config.jira)?;
    services::log_work(&client, &request).await?;

    print_success(
        &format!(
            "Successfully logged {}h {}m to {}",
            request.hours, request.minutes, request.issue_key
        ),
        ctx.quiet,
    );
    Ok(())
}
