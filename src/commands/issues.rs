use crate::{
    api::Jira,
    libs::{
        formatter::{self, Field},
        messages::Message,
        view::View,
    },
};
use anyhow::Result;

pub async fn cmd(jira: &mut Jira) -> Result<()> {
    let results = jira.assigned_issues().await?;
    let rows: Vec<Field> = results.issues.iter().map(formatter::issue_row).collect();

    View::title(&Message::IssuesHeader(results.total, jira.config().login.clone()).to_string());
    View::fields(("Key", "Summary"), &rows);
    Ok(())
}
