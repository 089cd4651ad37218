// src/config.rs
use crate::error::{ConfigError, Result};
use crate::view::sort::SortConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_ITEM_LIMIT: usize = 10_000;

/// How the listing sizes itself inside its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeightMode {
    #[default]
    Auto,
    FillContainer,
    MaxHeight(u16),
}

/// Which modifier the select-all shortcut uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Platform {
    Mac,
    Other,
}

impl Default for Platform {
    fn default() -> Self {
        if cfg!(target_os = "macos") { Platform::Mac } else { Platform::Other }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewConfig {
    pub root_label: Option<String>,
    pub show_upload: bool,
    pub initial_sort: SortConfig,
    pub height: HeightMode,
    pub item_limit: usize,
    pub platform: Platform,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            root_label: None,
            show_upload: true,
            initial_sort: SortConfig::default(),
            height: HeightMode::default(),
            item_limit: DEFAULT_ITEM_LIMIT,
            platform: Platform::default(),
        }
    }
}

impl ViewConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("filebrowser").join("config.json"))
    }

    /// Missing file means defaults; a file that exists but cannot be read is an error.
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => match Self::load(&path) {
                Err(ConfigError::NotFound(_)) => Ok(Self::default()),
                other => other,
            },
            None => Ok(Self::default()),
        }
    }
}

/// Per-render pagination hints from the data owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pagination {
    pub total_count: Option<usize>,
    pub has_more: bool,
    pub is_loading_more: bool,
}
