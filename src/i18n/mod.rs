// src/i18n/mod.rs
//! Text lookup is a collaborator; the listing only ever passes it keys.

use std::collections::BTreeMap;

pub mod keys {
    pub const ROOT: &str = "fileBrowser.root";
    pub const NO_FILES: &str = "fileBrowser.noFiles";
    pub const LIMIT_REACHED: &str = "fileBrowser.limitReached";
    pub const ITEMS_AND_MORE: &str = "fileBrowser.itemsAndMore";
    pub const ITEM_COUNT: &str = "fileBrowser.itemCount";
    pub const INVALID_DATE: &str = "fileBrowser.invalidDate";
    pub const DROP_FILES: &str = "fileBrowser.dropFiles";
    pub const LOADING_MORE: &str = "fileBrowser.loadingMore";
    pub const COLUMN_NAME: &str = "fileBrowser.column.name";
    pub const COLUMN_SIZE: &str = "fileBrowser.column.size";
    pub const COLUMN_UPDATED: &str = "fileBrowser.column.updatedAt";
    pub const ADD_UPLOAD: &str = "fileBrowser.add.upload";
    pub const ADD_CREATE_FOLDER: &str = "fileBrowser.add.createFolder";
    pub const ADD_IMPORT_FILES: &str = "fileBrowser.add.importFiles";
    pub const ADD_IMPORT_FOLDERS: &str = "fileBrowser.add.importFolders";
    pub const HELP: &str = "fileBrowser.help";
}

pub type Params = BTreeMap<&'static str, String>;

pub fn params<const N: usize>(pairs: [(&'static str, String); N]) -> Params {
    pairs.into_iter().collect()
}

pub trait Translate {
    fn t(&self, key: &str, params: &Params) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, &Params) -> String,
{
    fn t(&self, key: &str, params: &Params) -> String {
        self(key, params)
    }
}

/// Returns the key itself, with parameters appended. Used when no
/// translator is wired in so missing text is visible rather than blank.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyEcho;

impl Translate for KeyEcho {
    fn t(&self, key: &str, params: &Params) -> String {
        if params.is_empty() {
            return key.to_string();
        }
        let rendered: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        format!("{}({})", key, rendered.join(","))
    }
}
