//! Pure formatting of API data and durations.
//!
//! Nothing in here writes to the terminal or knows about colors. Functions
//! return plain structured values ([`Field`], [`IssueCard`],
//! [`FormattedInterval`], [`Elapsed`]) which [`crate::libs::view`] styles and
//! prints. That keeps the text testable without matching escape sequences.
//!
//! ```rust
//! use jirat::libs::formatter::Elapsed;
//! use chrono::Duration;
//!
//! let elapsed = Elapsed::from(Duration::seconds(1805));
//! assert_eq!(elapsed.to_string(), "30 minutes, 5 seconds");
//! ```

use super::messages::Message;
use super::timelog::{Interval, TIMESTAMP_FORMAT};
use crate::api::jira::{JiraComment, JiraIssue, JiraNamed, JiraProject};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A `(label, text)` pair; the unit every listing is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub text: String,
}

impl Field {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Everything `show` displays for one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCard {
    /// `<project> / <key>`
    pub title: String,
    pub summary: String,
    /// Type, Priority and Status, in that order.
    pub fields: Vec<Field>,
    pub description: String,
}

/// Total seconds split into whole minutes and the remaining seconds.
///
/// Uses floored division, so the seconds part is always in `0..60` even for
/// a negative total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub minutes: i64,
    pub seconds: i64,
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        let total = duration.num_seconds();
        Self {
            minutes: total.div_euclid(60),
            seconds: total.rem_euclid(60),
        }
    }
}

impl Display for Elapsed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes, {} seconds", self.minutes, self.seconds)
    }
}

/// One row of the `time --entries` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedInterval {
    pub id: usize,
    pub start: String,
    pub end: String,
    pub duration: String,
}

/// `HH:MM:SS`, with hours allowed past 24 and a leading `-` for negative spans.
pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!("{}{:02}:{:02}:{:02}", sign, total / 3600, (total % 3600) / 60, total % 60)
}

fn name_or_dash(named: &Option<JiraNamed>) -> String {
    named.as_ref().map(|n| n.name.clone()).unwrap_or_else(|| "-".to_string())
}

pub fn issue_card(issue: &JiraIssue) -> IssueCard {
    let fields = &issue.fields;
    IssueCard {
        title: format!("{} / {}", name_or_dash(&fields.project), issue.key),
        summary: fields.summary.clone(),
        fields: vec![
            Field::new("Type", name_or_dash(&fields.issuetype)),
            Field::new("Priority", name_or_dash(&fields.priority)),
            Field::new("Status", name_or_dash(&fields.status)),
        ],
        description: fields
            .description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| Message::NoDescription.to_string()),
    }
}

pub fn issue_row(issue: &JiraIssue) -> Field {
    Field::new(&issue.key, &issue.fields.summary)
}

pub fn project_row(project: &JiraProject) -> Field {
    Field::new(&project.key, &project.name)
}

/// Labels a comment with its author; the body is the text.
pub fn comment_row(comment: &JiraComment) -> Field {
    Field::new(&comment.author.display_name, &comment.body)
}

pub fn time_logged(key: &str, total: Duration) -> Message {
    let elapsed = Elapsed::from(total);
    Message::TimeLogged {
        key: key.to_string(),
        minutes: elapsed.minutes,
        seconds: elapsed.seconds,
    }
}

pub fn intervals(intervals: &[Interval]) -> Vec<FormattedInterval> {
    intervals
        .iter()
        .enumerate()
        .map(|(index, interval)| FormattedInterval {
            id: index + 1,
            start: interval.start.format(TIMESTAMP_FORMAT).to_string(),
            end: interval
                .end
                .map(|end| end.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_else(|| Message::TimeLogOpenInterval.to_string()),
            duration: format_duration(&interval.duration),
        })
        .collect()
}
