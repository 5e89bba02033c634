//! `Display` texts for [`Message`].
//!
//! Keeping every user-visible sentence in one match makes wording changes a
//! single-file edit and guarantees that each variant has exactly one text.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleJira => "Jira settings".to_string(),
            Message::ConfigUnreadable(err) => format!("Existing configuration ignored: {}", err),
            Message::JiraNotConfigured => "Jira is not configured yet. Run `jirat init` first.".to_string(),

            // === AUTHENTICATION MESSAGES ===
            Message::WrongPassword(count) => format!("You entered the wrong password {} times!", count),
            Message::JiraAuthenticateFailed => "Jira authenticate failed".to_string(),
            Message::LoggedOut => "Cached session and stored password removed".to_string(),

            // === API MESSAGES ===
            Message::JiraRequestFailed(resource, status) => format!("Jira request for {} failed with status {}", resource, status),
            Message::JiraUnauthorized(count) => format!("Jira rejected the session {} times, giving up", count),
            Message::CommentingFailed(status) => format!("Commenting failed (status {})", status),
            Message::TransitionFailed(key, status) => format!("Transition of issue {} failed with status {}", key, status),

            // === ISSUE MESSAGES ===
            Message::IssuesHeader(total, login) => format!("{} open issues assigned to {}", total, login),
            Message::ProjectsHeader(login) => format!("Projects visible to {}", login),
            Message::CommentsHeader(total, key) => format!("{} comments on {}", total, key),
            Message::CommentAdded(key) => format!("Comment added to {}", key),
            Message::NoDescription => "(no description)".to_string(),

            // === TIME LOG MESSAGES ===
            Message::ProgressStarted(key) => format!("Progress started on {}", key),
            Message::ProgressStopped(key) => format!("Progress stopped on {}", key),
            Message::TimeLogged { key, minutes, seconds } => {
                format!("{} minutes, {} seconds logged for issue {}", minutes, seconds, key)
            }
            Message::TimeLogIntervalsHeader(key) => format!("Work intervals for {}", key),
            Message::TimeLogOpenInterval => "in progress".to_string(),

            // === PROMPTS ===
            Message::PromptJiraLogin => "Enter your Jira login".to_string(),
            Message::PromptJiraUrl => "Enter the Jira API URL".to_string(),
            Message::PromptJiraPassword => "Enter your Jira password".to_string(),
            Message::PromptStartTransition => "Transition id for \"Start Progress\"".to_string(),
            Message::PromptStopTransition => "Transition id for \"Stop Progress\"".to_string(),
            Message::PromptAcceptInvalidCerts => "Accept invalid TLS certificates?".to_string(),
        };
        write!(f, "{}", text)
    }
}
