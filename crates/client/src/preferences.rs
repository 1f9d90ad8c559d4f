//! Local key-value preferences (currently just the theme).

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use foodie_core::ValueObject;

/// Preference key holding the colour theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not a JSON object of strings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// String key-value store for user preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Process-local store; nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences persisted as a flat JSON object, e.g. `{"theme":"dark"}`.
///
/// A missing file reads as empty. Every `set` rewrites the whole file; a file
/// that no longer parses is replaced rather than left blocking writes.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `{data_dir}/foodie/preferences.json`.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(default_preferences_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(PreferenceError::Parse(err)) => {
                tracing::warn!(
                    path = %self.path().display(),
                    "preference file is corrupt; overwriting it: {err}"
                );
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

/// Resolve `{app_data_dir}/foodie/preferences.json`.
fn default_preferences_path() -> anyhow::Result<PathBuf> {
    let mut dir = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    dir.push("foodie");
    dir.push("preferences.json");
    Ok(dir)
}

/// Colour theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl ValueObject for Theme {}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored value; anything other than `"dark"` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Read the theme from `store`, degrading to light on any failure.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        match store.get(THEME_KEY) {
            Ok(value) => Self::from_stored(value.as_deref()),
            Err(err) => {
                tracing::warn!("failed to read theme preference: {err}");
                Theme::default()
            }
        }
    }

    /// Persist the theme; failures are logged and otherwise ignored.
    pub fn save(self, store: &mut dyn PreferenceStore) {
        if let Err(err) = store.set(THEME_KEY, self.as_str()) {
            tracing::warn!(theme = self.as_str(), "failed to persist theme preference: {err}");
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
