// src/view/actions.rs

/// Operations on the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Rename,
    Move,
    Download,
    Share,
    Delete,
}

impl Action {
    pub const ALL: [Action; 5] = [Action::Rename, Action::Move, Action::Download, Action::Share, Action::Delete];

    /// Rename targets exactly one item; the rest need at least one.
    pub fn is_enabled(self, selected: usize) -> bool {
        match self {
            Action::Rename => selected == 1,
            _ => selected > 0,
        }
    }
}

/// Entries of the "add" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddAction {
    Upload,
    CreateFolder,
    ImportFiles,
    ImportFolders,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AddMenu {
    open: bool,
    show_upload: bool,
}

impl AddMenu {
    pub fn new(show_upload: bool) -> Self {
        AddMenu { open: false, show_upload }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn entries(&self) -> Vec<AddAction> {
        let mut entries = Vec::with_capacity(4);
        if self.show_upload {
            entries.push(AddAction::Upload);
        }
        entries.extend([AddAction::CreateFolder, AddAction::ImportFiles, AddAction::ImportFolders]);
        entries
    }

    pub fn offers(&self, action: AddAction) -> bool {
        action != AddAction::Upload || self.show_upload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_needs_single_selection() {
        assert!(!Action::Rename.is_enabled(0));
        assert!(Action::Rename.is_enabled(1));
        assert!(!Action::Rename.is_enabled(2));
        assert!(Action::Delete.is_enabled(2));
        assert!(!Action::Share.is_enabled(0));
    }

    #[test]
    fn upload_entry_follows_config() {
        assert_eq!(AddMenu::new(true).entries().first(), Some(&AddAction::Upload));
        let hidden = AddMenu::new(false);
        assert!(!hidden.entries().contains(&AddAction::Upload));
        assert!(!hidden.offers(AddAction::Upload));
        assert!(hidden.offers(AddAction::ImportFolders));
    }
}
