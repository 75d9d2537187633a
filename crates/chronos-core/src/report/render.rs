//! Report renderers
//!
//! Interpret a [`Command`] sequence into terminal text. Both renderers are pure
//! functions of the command sequence; all running totals live in per-call state.

use super::command::Command;

const WEEK_DIVIDER: &str = "===========================";
const DATE_DIVIDER: &str = "------------------";

/// Options for the detailed renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append ` // <comment>` to issue lines that carry a comment
    pub show_comments: bool,
    /// Print the `issue: summary` footer
    pub show_issue_summaries: bool,
}

/// Running state of the detailed renderer
#[derive(Debug, Default)]
struct FullState {
    week: u32,
    date: String,
    issue: String,
    summary: String,
    comment: Option<String>,
    week_total: f64,
    date_total: f64,
    issue_total: f64,
    issue_hours: f64,
    footer_started: bool,
}

impl FullState {
    fn apply(&mut self, command: &Command, options: &RenderOptions, out: &mut String) {
        match command {
            Command::ClearWeek => {
                self.week = 0;
                self.week_total = 0.0;
            }
            Command::ClearDate => {
                self.date.clear();
                self.date_total = 0.0;
            }
            Command::ClearIssue => {
                self.issue.clear();
                self.summary.clear();
                self.issue_total = 0.0;
                self.issue_hours = 0.0;
            }

            Command::NewWeek { week } => {
                self.week = *week;
                out.push_str(&format!("{}\nWeek {:2}\n{}\n\n", WEEK_DIVIDER, week, WEEK_DIVIDER));
            }
            Command::NewDate { date } => {
                self.date = date.clone();
                out.push_str(&format!("{}\n", date));
            }
            Command::NewIssue { issue, summary } => {
                self.issue = issue.clone();
                self.summary = summary.clone();
            }

            Command::SummaryDate => {
                if !self.date.is_empty() {
                    out.push_str(&format!("\t{}\n", DATE_DIVIDER));
                    out.push_str(&format!("\t\t {:6.2}\n", self.date_total));
                }
            }
            Command::SummaryWeek => {
                if self.week > 0 {
                    out.push_str(&format!("\n\tTotal:   {:6.2}\n\n", self.week_total));
                }
            }

            Command::NoteHours { hours, comment } => {
                self.week_total += hours;
                self.date_total += hours;
                self.issue_total += hours;
                self.issue_hours = *hours;
                self.comment = comment.clone();
            }

            Command::PrintNewIssue => {
                if !self.issue.is_empty() {
                    out.push_str(&format!("\t{}: {:6.2}", self.issue, self.issue_hours));
                    if !self.summary.is_empty() {
                        out.push(' ');
                        out.push_str(&self.summary);
                    }
                    out.push_str(&self.comment_suffix(options));
                    out.push('\n');
                }
            }
            Command::PrintSameIssue => {
                out.push_str(&format!(
                    "\t    \\--: {:6.2}{}\n",
                    self.issue_hours,
                    self.comment_suffix(options)
                ));
            }

            Command::IssueSummaryLine { issue, summary } => {
                if options.show_issue_summaries {
                    if !self.footer_started {
                        out.push_str(&format!("{}\nIssues\n{}\n\n", WEEK_DIVIDER, WEEK_DIVIDER));
                        self.footer_started = true;
                    }
                    out.push_str(&format!("{}: {}\n", issue, summary));
                }
            }
        }
    }

    fn comment_suffix(&self, options: &RenderOptions) -> String {
        match &self.comment {
            Some(comment) if options.show_comments && !comment.is_empty() => {
                format!(" // {}", comment)
            }
            _ => String::new(),
        }
    }
}

/// Render the detailed report: week banners, dates, one line per time entry,
/// per-date and per-week totals.
pub fn render_full(commands: &[Command], options: &RenderOptions) -> String {
    let mut state = FullState::default();
    let mut out = String::new();

    for command in commands {
        state.apply(command, options, &mut out);
    }

    out
}

/// Running state of the brief renderer
#[derive(Debug, Default)]
struct BriefState {
    week: u32,
    week_total: f64,
    date_total: f64,
    issue_total: f64,
}

/// Render one `Week [ w]: total` line per week.
pub fn render_brief(commands: &[Command]) -> String {
    let mut state = BriefState::default();
    let mut out = String::new();

    for command in commands {
        match command {
            Command::ClearWeek => state.week_total = 0.0,
            Command::ClearDate => state.date_total = 0.0,
            Command::ClearIssue => state.issue_total = 0.0,
            Command::NewWeek { week } => state.week = *week,
            Command::NoteHours { hours, .. } => {
                state.week_total += hours;
                state.date_total += hours;
                state.issue_total += hours;
            }
            Command::SummaryWeek => {
                if state.week > 0 {
                    out.push_str(&format!("Week [{:2}]: {:.2}\n", state.week, state.week_total));
                }
            }
            _ => {}
        }
    }

    out
}
