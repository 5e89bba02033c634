use crate::{
    libs::{
        formatter,
        messages::Message,
        timelog::{self, TimeLog},
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct TimeArgs {
    #[arg(required = true, help = "Issue key, e.g. PROJ-123")]
    pub key: String,
    #[arg(long, help = "Also list the work intervals behind the total")]
    pub entries: bool,
}

pub fn cmd(time_log: &TimeLog, args: TimeArgs) -> Result<()> {
    let now = Local::now().naive_local();
    let entries = time_log.entries(&args.key)?;

    if args.entries {
        View::title(&Message::TimeLogIntervalsHeader(args.key.clone()).to_string());
        View::intervals(&formatter::intervals(&timelog::intervals(&entries, now)));
    }

    msg_print!(formatter::time_logged(&args.key, timelog::accumulate(&entries, now)));
    Ok(())
}
