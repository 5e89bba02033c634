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
    let projects = jira.projects().await?;
    let rows: Vec<Field> = projects.iter().map(formatter::project_row).collect();

    View::title(&Message::ProjectsHeader(jira.config().login.clone()).to_string());
    View::fields(("Key", "Name"), &rows);
    Ok(())
}
