use super::IssueArgs;
use crate::{
    api::Jira,
    libs::{formatter, view::View},
};
use anyhow::Result;

pub async fn cmd(jira: &mut Jira, args: IssueArgs) -> Result<()> {
    let issue = jira.issue(&args.key).await?;
    View::issue(&formatter::issue_card(&issue));
    Ok(())
}
