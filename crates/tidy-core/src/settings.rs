//! Settings persistence
//!
//! Options are stored as one JSON blob under [`SETTINGS_KEY`] in a keyed
//! store, so other keys written by the same host survive a save.

use crate::error::SettingsError;
use crate::options::AllOptions;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Key the option blob is stored under
pub const SETTINGS_KEY: &str = "allOptions";

/// Persistent option storage
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Saved options, or the defaults if nothing was saved yet
    ///
    /// # Errors
    /// Storage or format failures.
    async fn load(&self) -> Result<AllOptions, SettingsError>;

    /// Persist `options`
    ///
    /// # Errors
    /// Storage failures.
    async fn save(&self, options: &AllOptions) -> Result<(), SettingsError>;
}

fn options_from(entries: &Map<String, Value>) -> Result<AllOptions, SettingsError> {
    match entries.get(SETTINGS_KEY) {
        Some(blob) => Ok(AllOptions::deserialize(blob)?),
        None => Ok(AllOptions::default()),
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    entries: Mutex<Map<String, Value>>,
}

impl MemorySettingsStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create store with `options` already saved
    #[must_use]
    pub fn with_options(options: &AllOptions) -> Self {
        let store = Self::new();
        if let Ok(blob) = serde_json::to_value(options) {
            store.entries.lock().insert(SETTINGS_KEY.to_string(), blob);
        }
        store
    }

    /// Raw value stored under `key`
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<Value> {
        self.entries.lock().get(key).cloned()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load(&self) -> Result<AllOptions, SettingsError> {
        options_from(&self.entries.lock())
    }

    async fn save(&self, options: &AllOptions) -> Result<(), SettingsError> {
        let blob = serde_json::to_value(options)?;
        self.entries.lock().insert(SETTINGS_KEY.to_string(), blob);
        Ok(())
    }
}

/// Store backed by a JSON object file
///
/// A missing file reads as "nothing saved".
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    /// Create store at `path`
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Map<String, Value>, SettingsError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) if text.trim().is_empty() => Ok(Map::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait]
impl SettingsStore for JsonFileSettingsStore {
    async fn load(&self) -> Result<AllOptions, SettingsError> {
        let entries = self.read_entries().await?;
        options_from(&entries)
    }

    async fn save(&self, options: &AllOptions) -> Result<(), SettingsError> {
        let mut entries = self.read_entries().await?;
        entries.insert(SETTINGS_KEY.to_string(), serde_json::to_value(options)?);

        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir).await?;
        }
        let text = serde_json::to_string_pretty(&entries)?;
        tokio::fs::write(&self.path, text).await?;

        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[tokio::test]
    async fn memory_round_trip() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.load().await.unwrap(), AllOptions::default());

        let options = AllOptions::new().with_hidden(true).with_language(Language::Zh);
        store.save(&options).await.unwrap();
        assert_eq!(store.load().await.unwrap(), options);
        assert_eq!(store.raw(SETTINGS_KEY).unwrap()["language"], "zh");
    }

    #[tokio::test]
    async fn file_store_missing_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSettingsStore::new(dir.path().join("settings.json"));
        assert_eq!(store.load().await.unwrap(), AllOptions::default());
    }

    #[tokio::test]
    async fn file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "theme": "dark" }"#).unwrap();

        let store = JsonFileSettingsStore::new(&path);
        let options = AllOptions::new().with_show_spacing(true);
        store.save(&options).await.unwrap();

        assert_eq!(store.load().await.unwrap(), options);
        let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["theme"], "dark");
        assert_eq!(saved[SETTINGS_KEY]["showSpacing"], true);
    }

    #[tokio::test]
    async fn file_store_rejects_malformed_blob() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonFileSettingsStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }
}
