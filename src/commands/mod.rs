pub mod comment;
pub mod comments;
pub mod init;
pub mod issues;
pub mod logout;
pub mod progress;
pub mod projects;
pub mod show;
pub mod time;

use crate::api::Jira;
use crate::libs::{config::Config, data_storage::DataStorage, timelog::TimeLog, timelog::Transition};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

/// A single issue addressed by its key, e.g. `PROJ-123`.
#[derive(Debug, Args)]
pub struct IssueArgs {
    #[arg(required = true, help = "Issue key, e.g. PROJ-123")]
    pub key: String,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Forget the cached Jira session and stored password")]
    Logout,
    #[command(about = "List open issues assigned to you")]
    Issues,
    #[command(about = "List projects visible to you")]
    Projects,
    #[command(about = "Show an issue")]
    Show(IssueArgs),
    #[command(about = "List comments on an issue")]
    Comments(IssueArgs),
    #[command(about = "Comment on an issue")]
    Comment(comment::CommentArgs),
    #[command(about = "Start progress on an issue and log the start")]
    Start(IssueArgs),
    #[command(about = "Stop progress on an issue and log the stop")]
    Stop(IssueArgs),
    #[command(about = "Show time logged for an issue")]
    Time(time::TimeArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let storage = DataStorage::new();
        let time_log = TimeLog::new(&storage);

        // `init` must work even when the existing file is unreadable.
        let config = match cli.command {
            Commands::Init(_) | Commands::Logout => Config::default(),
            _ => Config::read()?,
        };
        let jira = || -> Result<Jira> { Jira::with_storage(config.jira()?, storage.clone()) };

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Logout => logout::cmd(&storage),
            Commands::Issues => issues::cmd(&mut jira()?).await,
            Commands::Projects => projects::cmd(&mut jira()?).await,
            Commands::Show(args) => show::cmd(&mut jira()?, args).await,
            Commands::Comments(args) => comments::cmd(&mut jira()?, args).await,
            Commands::Comment(args) => comment::cmd(&mut jira()?, args).await,
            Commands::Start(args) => progress::cmd(&mut jira()?, &time_log, args, Transition::Start).await,
            Commands::Stop(args) => progress::cmd(&mut jira()?, &time_log, args, Transition::Stop).await,
            Commands::Time(args) => time::cmd(&time_log, args),
        }
    }
}
