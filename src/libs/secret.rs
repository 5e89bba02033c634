//! Encrypted password cache.
//!
//! The Jira password never goes into `config.json`. It is encrypted with
//! AES-256-CBC using the key and IV embedded by `build.rs`, base64 encoded and
//! written to a dot-file in the data directory.

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(storage: &DataStorage, secret_name: &str, prompt: &str) -> Self {
        let secret_file_path = storage.get_path(secret_name).unwrap_or_else(|_| storage.dir(secret_name));

        Self {
            prompt: prompt.to_owned(),
            secret_file_path,
            key: APP_METADATA_ENCRYPTION_KEY.to_vec(),
            iv: APP_METADATA_ENCRYPTION_IV.to_vec(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.secret_file_path
    }

    /// Returns the stored password, prompting when nothing readable is stored.
    pub fn get_or_prompt(&self) -> Result<String> {
        match self.read() {
            Ok(password) => Ok(password),
            Err(err) => {
                tracing::debug!("stored secret unavailable: {}", err);
                self.prompt()
            }
        }
    }

    /// Always prompts, then stores whatever was entered.
    pub fn prompt(&self) -> Result<String> {
        let password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(&self.prompt)
            .interact()?;
        self.store(&password)?;
        Ok(password)
    }

    pub fn store(&self, password: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let encoded = BASE64_STANDARD.encode(cipher.encrypt_vec(password.as_bytes()));

        if let Some(parent) = self.secret_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.secret_file_path, encoded)?;
        Ok(())
    }

    pub fn read(&self) -> Result<String> {
        let encoded = fs::read_to_string(&self.secret_file_path)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        Ok(String::from_utf8(cipher.decrypt_vec(&ciphertext)?)?)
    }

    /// Removes the stored password. A missing file is not an error.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.secret_file_path) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}
