pub use crate::settings_types::*;
use crate::storage_dir;
use bevy::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Settings {
    pub fn path() -> PathBuf {
        storage_dir().join("settings.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, self.to_toml_string()?).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the global settings file, writing defaults when it doesn't exist.
    /// A broken file is logged and replaced by defaults in memory only.
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            info!("Creating default settings at {:?}", path);
            let default_settings = Settings::default();
            default_settings.save();
            return default_settings;
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                info!("Loaded global settings from {:?}", path);
                settings
            }
            Err(e) => {
                error!("Failed to load settings.toml: {}", e);
                Settings::default()
            }
        }
    }

    pub fn save(&self) {
        let path = Self::path();
        match self.save_to(&path) {
            Ok(()) => info!("Saved global settings to {:?}", path),
            Err(e) => error!("Failed to save settings.toml: {}", e),
        }
    }
}

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<Settings>() {
            app.insert_resource(Settings::load());
        }
    }
}
