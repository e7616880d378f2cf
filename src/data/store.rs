//! Flat-file JSON persistence.
//!
//! Both documents (guild settings, VRTEX+ member list) are parsed fresh on
//! every read and rewritten wholesale on every write. There is no in-memory
//! cache and no locking: concurrent writers to the same document race with
//! last-write-wins semantics. The documents are pretty-printed because the
//! member list is maintained by hand.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::{data::membership::MembersDocument, error::store::StoreError};

/// Handle on the two persistence documents.
///
/// Carries only the document paths, so clones are cheap and every operation
/// goes back to disk. Injected through `AppState` so tests can point it at a
/// throwaway directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    settings_path: PathBuf,
    members_path: PathBuf,
}

impl JsonStore {
    pub fn new(settings_path: PathBuf, members_path: PathBuf) -> Self {
        Self {
            settings_path,
            members_path,
        }
    }

    /// Creates either document with empty content if it does not exist yet.
    ///
    /// Existing documents are left untouched.
    pub async fn init(&self) -> Result<(), StoreError> {
        if !self.settings_path.exists() {
            self.write_doc(
                &self.settings_path,
                &HashMap::<String, serde_json::Value>::new(),
            )
            .await?;
        }
        if !self.members_path.exists() {
            self.write_doc(&self.members_path, &MembersDocument::default())
                .await?;
        }
        Ok(())
    }

    /// Reads the settings document: raw guild id → stored record.
    ///
    /// Records stay as raw JSON values here so that writing one guild's
    /// record never reshapes another guild's partial record.
    pub async fn read_settings(
        &self,
    ) -> Result<HashMap<String, serde_json::Value>, StoreError> {
        self.read_doc(&self.settings_path).await
    }

    pub async fn write_settings(
        &self,
        settings: &HashMap<String, serde_json::Value>,
    ) -> Result<(), StoreError> {
        self.write_doc(&self.settings_path, settings).await
    }

    pub async fn read_members(&self) -> Result<MembersDocument, StoreError> {
        self.read_doc(&self.members_path).await
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    async fn read_doc<T: DeserializeOwned>(&self, path: &Path) -> Result<T, StoreError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    async fn write_doc<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(value).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tokio::fs::write(path, raw)
            .await
            .map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}
