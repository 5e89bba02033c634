//! Start/stop progress.
//!
//! The remote transition runs first. Only once the server accepted it is the
//! matching marker appended to the local time log, so the log never records
//! progress the tracker does not know about.

use super::IssueArgs;
use crate::{
    api::Jira,
    libs::{
        messages::Message,
        timelog::{TimeLog, Transition},
    },
    msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};

/// Transitions `key` on the server, then logs `transition` at `now`.
pub async fn run(jira: &mut Jira, time_log: &TimeLog, key: &str, transition: Transition, now: NaiveDateTime) -> Result<()> {
    // Reject keys the log cannot store before touching the server.
    time_log.path(key)?;

    match transition {
        Transition::Start => jira.start_progress(key).await?,
        Transition::Stop => jira.stop_progress(key).await?,
    }
    time_log.append(key, transition, now)?;
    Ok(())
}

pub async fn cmd(jira: &mut Jira, time_log: &TimeLog, args: IssueArgs, transition: Transition) -> Result<()> {
    run(jira, time_log, &args.key, transition, Local::now().naive_local()).await?;

    match transition {
        Transition::Start => msg_success!(Message::ProgressStarted(args.key)),
        Transition::Stop => msg_success!(Message::ProgressStopped(args.key)),
    }
    Ok(())
}
