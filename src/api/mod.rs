//! Issue tracker API client.
//!
//! [`jira::Jira`] talks to the Jira REST API. Authentication goes through the
//! [`Session`] trait: a session cookie is cached in the data directory and only
//! renewed (with the stored or prompted password) when it is missing or the
//! server rejects it.
//!
//! ```rust,no_run
//! use jirat::api::Jira;
//! use jirat::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let mut jira = Jira::new(config.jira()?)?;
//! let issue = jira.issue("PROJ-123").await?;
//! println!("{}", issue.fields.summary);
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::libs::{data_storage::DataStorage, secret::Secret};
use crate::msg_bail_anyhow;
use anyhow::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub mod jira;

pub use jira::{Jira, JiraConfig};

/// Login attempts before giving up on the entered password.
pub const MAX_LOGIN_ATTEMPTS: i32 = 3;

/// Cookie-based session handling shared by API clients.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Authenticates with the credentials set by [`Session::set_credentials`]
    /// and returns the session cookie as `name=value`.
    async fn login(&self) -> Result<String>;

    fn set_credentials(&mut self, password: &str) -> Result<()>;

    /// File name of the cached session inside [`Session::storage`].
    fn session_id_file(&self) -> &str;

    fn storage(&self) -> &DataStorage;

    fn secret(&self) -> Secret;

    /// Failed login attempts so far.
    fn retry(&self) -> i32;

    fn inc_retry(&mut self);

    fn session_id_path(&self) -> Result<PathBuf> {
        self.storage().get_path(self.session_id_file())
    }

    /// Returns the cached session, logging in when there is none.
    ///
    /// The first login attempt uses the stored password if there is one. Every
    /// further attempt prompts again, up to [`MAX_LOGIN_ATTEMPTS`].
    async fn get_session_id(&mut self) -> Result<String> {
        let path = self.session_id_path()?;
        if let Some(session_id) = read_session_id(&path) {
            return Ok(session_id);
        }

        loop {
            let password = match self.retry() > 0 {
                true => self.secret().prompt()?,
                false => self.secret().get_or_prompt()?,
            };
            self.set_credentials(&password)?;

            match self.login().await {
                Ok(session_id) => {
                    write_session_id(&path, &session_id)?;
                    return Ok(session_id);
                }
                Err(err) => {
                    tracing::debug!("login failed: {}", err);
                    self.inc_retry();
                    if self.retry() >= MAX_LOGIN_ATTEMPTS {
                        msg_bail_anyhow!(Message::WrongPassword(self.retry()));
                    }
                }
            }
        }
    }

    /// Forgets the cached session so the next call logs in again.
    fn delete_session_id(&self) -> Result<()> {
        remove_if_exists(&self.session_id_path()?)
    }
}

fn read_session_id(path: &Path) -> Option<String> {
    let session_id = fs::read_to_string(path).ok()?;
    let session_id = session_id.trim();
    (!session_id.is_empty()).then(|| session_id.to_string())
}

fn write_session_id(path: &Path, session_id: &str) -> Result<()> {
    fs::write(path, session_id)?;
    Ok(())
}

pub(crate) fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
        _ => Ok(()),
    }
}
