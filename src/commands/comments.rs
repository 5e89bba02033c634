use super::IssueArgs;
use crate::{
    api::Jira,
    libs::{
        formatter::{self, Field},
        messages::Message,
        view::View,
    },
};
use anyhow::Result;

pub async fn cmd(jira: &mut Jira, args: IssueArgs) -> Result<()> {
    let page = jira.comments(&args.key).await?;
    let rows: Vec<Field> = page.comments.iter().map(formatter::comment_row).collect();

    View::title(&Message::CommentsHeader(page.total, args.key).to_string());
    View::comments(&rows);
    Ok(())
}
