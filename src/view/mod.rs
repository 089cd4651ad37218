// src/view/mod.rs
pub mod actions;
pub mod browser;
pub mod callbacks;
pub mod drag;
pub mod filter;
pub mod keyboard;
pub mod label;
pub mod listener;
pub mod path;
pub mod selection;
pub mod sort;

pub use actions::{Action, AddAction};
pub use browser::FileBrowser;
pub use callbacks::Callbacks;
pub use drag::{DragEvent, DropPayload};
pub use filter::DateFilter;
pub use keyboard::{FocusTarget, Key, KeyInput};
pub use label::ItemCountLabel;
pub use path::PathSegment;
pub use selection::Modifiers;
pub use sort::{SortConfig, SortDirection, SortKey};

/// Whether the host should suppress the platform's default handling
/// (scrolling, rejecting the drop) for an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    PreventDefault,
    Ignored,
}
