use crate::{api::Jira, libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CommentArgs {
    #[arg(required = true, help = "Issue key, e.g. PROJ-123")]
    pub key: String,
    #[arg(required = true, help = "Comment text")]
    pub body: String,
}

pub async fn cmd(jira: &mut Jira, args: CommentArgs) -> Result<()> {
    jira.add_comment(&args.key, &args.body).await?;
    msg_success!(Message::CommentAdded(args.key));
    Ok(())
}
