use crate::domain::fuzzy::SearchOptions;
use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    /// Key that opens the command palette, e.g. "/" or "F2".
    pub open_palette: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            open_palette: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: PaletteType,
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub search: SearchOptions,
    pub keys: KeyConfig,
}

pub fn get_config_path() -> Option<PathBuf> {
    super::persistence::get_data_dir().map(|mut path| {
        path.push("config.toml");
        path
    })
}

impl AppConfig {
    /// Loads the user config, falling back to defaults when the file is
    /// missing or invalid.
    #[must_use]
    pub fn load() -> Self {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                return Self::default();
            }
        };
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(super::persistence::get_data_dir)
    }
}
