//! Per-user application data directory.
//!
//! Every file jirat owns lives below one base directory: the config file, the
//! cached Jira session, the encrypted password and the `log/` directory holding
//! one time log per issue.
//!
//! - **Windows**: `%LOCALAPPDATA%\jirat`
//! - **macOS**: `~/Library/Application Support/jirat`
//! - **Linux**: `~/.local/share/jirat`

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "jirat";

#[derive(Clone, Debug)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    /// Resolves the platform data directory from the environment.
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };

        Self::with_base(Path::new(&base_path).join(APP_NAME))
    }

    /// Roots the storage at an explicit directory.
    pub fn with_base(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of a file directly under the base directory, creating the base on demand.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }

    /// Path of a subdirectory. The directory itself is not created.
    pub fn dir(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }
}
