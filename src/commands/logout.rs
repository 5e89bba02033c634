use crate::{
    api::Jira,
    libs::{data_storage::DataStorage, messages::Message},
    msg_success,
};
use anyhow::Result;

pub fn cmd(storage: &DataStorage) -> Result<()> {
    Jira::forget(storage)?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
