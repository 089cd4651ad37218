// src/filesystem/mod.rs
pub mod dir;
pub mod file;

pub use dir::DirNavigator;
pub use file::parse_timestamp;

use serde::{Deserialize, Serialize};

/// One row of the listing. Supplied by the collaborator that owns the data;
/// the view never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Advisory only.
    #[serde(default)]
    pub parent_path: String,
    #[serde(default)]
    pub size_bytes: u64,
    #[serde(default)]
    pub is_directory: bool,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub disabled: bool,
}

impl Item {
    pub fn file(id: impl Into<String>, name: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            parent_path: String::new(),
            size_bytes: 0,
            is_directory: false,
            updated_at: String::new(),
            created_at: String::new(),
            disabled: false,
        }
    }

    pub fn directory(id: impl Into<String>, name: impl Into<String>) -> Self {
        Item { is_directory: true, ..Item::file(id, name) }
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }

    pub fn with_updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = updated_at.into();
        self
    }

    pub fn with_parent(mut self, parent_path: impl Into<String>) -> Self {
        self.parent_path = parent_path.into();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Directories always report zero bytes.
    pub fn effective_size(&self) -> u64 {
        if self.is_directory { 0 } else { self.size_bytes }
    }
}
