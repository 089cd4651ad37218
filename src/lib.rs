// src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod i18n;
pub mod logging;
pub mod utils;
pub mod view;

pub use config::{HeightMode, Pagination, Platform, ViewConfig};
pub use error::{ConfigError, Result};
pub use filesystem::Item;
pub use view::{Callbacks, FileBrowser};
