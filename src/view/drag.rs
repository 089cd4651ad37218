// src/view/drag.rs
use std::path::PathBuf;

/// Whatever the platform handed over on drop. Forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropPayload {
    pub paths: Vec<PathBuf>,
    pub raw: String,
}

impl DropPayload {
    /// Terminals deliver dropped files as pasted text: one or more paths,
    /// optionally quoted, with backslash-escaped spaces.
    pub fn from_pasted(text: &str) -> Self {
        let mut paths = Vec::new();
        let mut current = String::new();
        let mut quote: Option<char> = None;
        let mut chars = text.chars();

        while let Some(c) = chars.next() {
            match (quote, c) {
                (Some(q), c) if c == q => quote = None,
                (None, '\'' | '"') => quote = Some(c),
                (None, '\\') => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                }
                (None, c) if c.is_whitespace() => {
                    if !current.is_empty() {
                        paths.push(PathBuf::from(std::mem::take(&mut current)));
                    }
                }
                (_, c) => current.push(c),
            }
        }
        if !current.is_empty() {
            paths.push(PathBuf::from(current));
        }

        DropPayload { paths, raw: text.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Enter { has_files: bool },
    Over,
    Leave,
    Drop(DropPayload),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Activated,
    Deactivated,
    Unchanged,
}

/// Counts unmatched enter/leave pairs so nested targets do not flicker the
/// import overlay. Visible iff the count is non-zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragOverlay {
    depth: u32,
}

impl DragOverlay {
    pub fn new() -> Self {
        DragOverlay::default()
    }

    pub fn is_active(&self) -> bool {
        self.depth > 0
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn enter(&mut self, has_files: bool) -> Transition {
        if !has_files {
            return Transition::Unchanged;
        }
        self.depth += 1;
        if self.depth == 1 { Transition::Activated } else { Transition::Unchanged }
    }

    pub fn leave(&mut self) -> Transition {
        if self.depth == 0 {
            return Transition::Unchanged;
        }
        self.depth -= 1;
        if self.depth == 0 { Transition::Deactivated } else { Transition::Unchanged }
    }

    pub fn drop_payload(&mut self) -> Transition {
        let was_active = self.is_active();
        self.depth = 0;
        if was_active { Transition::Deactivated } else { Transition::Unchanged }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_enter_leave_toggles_once() {
        let mut overlay = DragOverlay::new();
        assert_eq!(overlay.enter(true), Transition::Activated);
        assert_eq!(overlay.enter(true), Transition::Unchanged);
        assert_eq!(overlay.enter(true), Transition::Unchanged);
        assert_eq!(overlay.leave(), Transition::Unchanged);
        assert_eq!(overlay.leave(), Transition::Unchanged);
        assert!(overlay.is_active());
        assert_eq!(overlay.leave(), Transition::Deactivated);
        assert_eq!(overlay.depth(), 0);
        assert!(!overlay.is_active());
    }

    #[test]
    fn balanced_sequences_return_to_zero() {
        let patterns: [&[bool]; 3] = [
            &[true, false, true, false],
            &[true, true, false, true, false, false],
            &[true, true, true, false, false, false],
        ];
        for pattern in patterns {
            let mut overlay = DragOverlay::new();
            let mut open = 0u32;
            for &is_enter in pattern {
                if is_enter {
                    overlay.enter(true);
                    open += 1;
                } else {
                    overlay.leave();
                    open -= 1;
                }
                assert_eq!(overlay.is_active(), open > 0);
            }
            assert_eq!(overlay.depth(), 0);
        }
    }

    #[test]
    fn leave_without_enter_never_underflows() {
        let mut overlay = DragOverlay::new();
        assert_eq!(overlay.leave(), Transition::Unchanged);
        assert_eq!(overlay.depth(), 0);
        assert_eq!(overlay.enter(true), Transition::Activated);
    }

    #[test]
    fn non_file_drags_are_ignored() {
        let mut overlay = DragOverlay::new();
        assert_eq!(overlay.enter(false), Transition::Unchanged);
        assert!(!overlay.is_active());
    }

    #[test]
    fn drop_resets() {
        let mut overlay = DragOverlay::new();
        overlay.enter(true);
        overlay.enter(true);
        assert_eq!(overlay.drop_payload(), Transition::Deactivated);
        assert_eq!(overlay.depth(), 0);
        assert_eq!(overlay.drop_payload(), Transition::Unchanged);
    }

    #[test]
    fn pasted_paths() {
        let payload = DropPayload::from_pasted("'/tmp/a b.txt' /tmp/c\\ d.png \"/x/y\"");
        assert_eq!(
            payload.paths,
            vec![PathBuf::from("/tmp/a b.txt"), PathBuf::from("/tmp/c d.png"), PathBuf::from("/x/y")]
        );
    }
}
