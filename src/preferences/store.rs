use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{PreferenceError, Result};

pub const CONFIG_FILE_NAME: &str = "config.yml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub is_analytics_disabled: bool,
}

/// Persists the on/off switch in the plugin's data directory.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    data_dir: Option<PathBuf>,
}

impl PreferenceStore {
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self { data_dir }
    }

    pub fn path(&self) -> Option<PathBuf> {
        self.data_dir
            .as_deref()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Missing directory or file reads as the defaults (analytics enabled).
    pub fn load(&self) -> Result<Preferences> {
        let Some(path) = self.path() else {
            return Ok(Preferences::default());
        };
        match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => Ok(Preferences::default()),
            Ok(raw) => Ok(serde_yaml::from_str(&raw)?),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Preferences::default()),
            Err(error) => Err(error.into()),
        }
    }

    pub fn is_enabled(&self) -> Result<bool> {
        Ok(!self.load()?.is_analytics_disabled)
    }

    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        let path = self.path().ok_or(PreferenceError::MissingDataDir)?;
        let preferences = Preferences {
            is_analytics_disabled: !enabled,
        };
        write(&path, &preferences)?;
        debug!(path = %path.display(), enabled, "analytics preference saved");
        Ok(())
    }
}

fn write(path: &Path, preferences: &Preferences) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_yaml::to_string(preferences)?)?;
    Ok(())
}
