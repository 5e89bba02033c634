//! Application configuration.
//!
//! Settings live in `config.json` in the data directory as pretty-printed
//! JSON. The file is read once at process entry and the resulting [`Config`]
//! is handed to every command that needs it.
//!
//! ```json
//! {
//!   "jira": {
//!     "login": "jdoe",
//!     "api_url": "https://jira.example.com",
//!     "start_transition": "4",
//!     "stop_transition": "301",
//!     "accept_invalid_certs": false
//!   }
//! }
//! ```
//!
//! Passwords are never part of this file; see [`crate::libs::secret`].

use super::data_storage::DataStorage;
use crate::api::jira::{self, JiraConfig};
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print, msg_warning};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Jira connection settings. `None` until `jirat init` has run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Loads the configuration, falling back to the default when no file exists.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        serde_json::from_str(&config_str).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn delete() -> Result<()> {
        Self::delete_at(&Self::path()?)
    }

    pub fn delete_at(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }

    /// Interactive setup wizard.
    ///
    /// Existing values are offered as defaults. After the Jira settings are
    /// collected the password is prompted for and stored encrypted.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_else(|err| {
            msg_warning!(Message::ConfigUnreadable(format!("{:#}", err)));
            Self::default()
        });

        msg_print!(Message::ConfigModuleJira);
        config.jira = Some(JiraConfig::init(&config.jira)?);
        jira::secret(&DataStorage::new()).prompt()?;

        Ok(config)
    }

    /// The Jira section, or an error telling the user to run `init`.
    pub fn jira(&self) -> Result<&JiraConfig> {
        self.jira.as_ref().ok_or_else(|| msg_error_anyhow!(Message::JiraNotConfigured))
    }
}
