//! Report command builder
//!
//! Sorts time entries and turns the week/date/issue transitions between them
//! into a flat sequence of [`Command`]s.

use std::collections::BTreeMap;

use super::command::Command;
use crate::models::TimeEntry;

/// Build report commands from an unordered set of time entries.
///
/// Entries are sorted by date, then issue key. Scopes nest week ⊃ date ⊃ issue;
/// every transition closes the scopes it leaves before opening new ones, and the
/// last group is always closed with its trailing summaries. One
/// `IssueSummaryLine` per distinct issue key follows in lexical key order.
///
/// Empty input yields no commands at all.
pub fn build_report_commands(entries: &[TimeEntry]) -> Vec<Command> {
    let mut sorted: Vec<&TimeEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.issue.cmp(&b.issue)));

    let mut commands = Vec::new();

    // Sentinels never match a real entry: weeks start at 1, dates and keys are non-empty
    let mut current_week = 0;
    let mut current_date = "";
    let mut current_issue = "";

    for entry in sorted.iter().copied() {
        if entry.week != current_week {
            if current_week != 0 {
                commands.extend([
                    Command::SummaryDate,
                    Command::SummaryWeek,
                    Command::ClearIssue,
                    Command::ClearDate,
                    Command::ClearWeek,
                ]);
            }

            commands.push(Command::NewWeek { week: entry.week });
            commands.push(Command::NewDate {
                date: entry.date.clone(),
            });
            open_issue(&mut commands, entry);

            current_week = entry.week;
            current_date = &entry.date;
            current_issue = &entry.issue;
        } else if entry.date != current_date {
            commands.extend([Command::SummaryDate, Command::ClearIssue, Command::ClearDate]);

            commands.push(Command::NewDate {
                date: entry.date.clone(),
            });
            open_issue(&mut commands, entry);

            current_date = &entry.date;
            current_issue = &entry.issue;
        } else if entry.issue != current_issue {
            commands.push(Command::ClearIssue);
            open_issue(&mut commands, entry);

            current_issue = &entry.issue;
        } else {
            commands.push(note_hours(entry));
            commands.push(Command::PrintSameIssue);
        }
    }

    if commands.is_empty() {
        return commands;
    }

    // Always finish by closing every scope so the last group gets its summaries
    commands.extend([
        Command::ClearIssue,
        Command::SummaryDate,
        Command::ClearDate,
        Command::SummaryWeek,
        Command::ClearWeek,
    ]);

    commands.extend(issue_summaries(&sorted).into_iter().map(|(issue, summary)| {
        Command::IssueSummaryLine {
            issue: issue.to_string(),
            summary: summary.to_string(),
        }
    }));

    log::debug!(
        "[report] Built {} commands from {} time entries",
        commands.len(),
        entries.len()
    );

    commands
}

fn open_issue(commands: &mut Vec<Command>, entry: &TimeEntry) {
    commands.push(Command::NewIssue {
        issue: entry.issue.clone(),
        summary: entry.summary.clone(),
    });
    commands.push(note_hours(entry));
    commands.push(Command::PrintNewIssue);
}

fn note_hours(entry: &TimeEntry) -> Command {
    Command::NoteHours {
        hours: entry.hours,
        comment: entry.comment.clone(),
    }
}

/// Distinct issue keys with their summary, ordered by key.
/// When a key carries different summaries the last one in iteration order wins.
fn issue_summaries<'a>(entries: &[&'a TimeEntry]) -> BTreeMap<&'a str, &'a str> {
    let mut summaries = BTreeMap::new();
    for entry in entries {
        summaries.insert(entry.issue.as_str(), entry.summary.as_str());
    }
    summaries
}
