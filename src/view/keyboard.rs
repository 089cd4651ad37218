// src/view/keyboard.rs
use crate::config::Platform;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Char(char),
    Other,
}

/// A key press, independent of the terminal or windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        KeyInput { key, shift: false, ctrl: false, meta: false }
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Ctrl everywhere except macOS, where it is Cmd.
    pub fn platform_modifier(&self, platform: Platform) -> bool {
        match platform {
            Platform::Mac => self.meta,
            Platform::Other => self.ctrl,
        }
    }

    /// Returns `None` for key releases.
    pub fn from_crossterm(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let key = match event.code {
            KeyCode::Up => Key::ArrowUp,
            KeyCode::Down => Key::ArrowDown,
            KeyCode::Enter => Key::Enter,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        };
        Some(KeyInput {
            key,
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            meta: event.modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META),
        })
    }
}

/// Where input focus currently sits relative to the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    Surface,
    TextInput,
    #[default]
    Elsewhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    SelectAll,
    /// Move the active index by `delta`; `extend` grows the range from the anchor.
    Move { delta: isize, extend: bool },
    Activate,
}

/// Maps a key press to a command. Select-all works anywhere except inside
/// a text field; everything else needs the listing to hold focus.
pub fn interpret(input: &KeyInput, focus: FocusTarget, platform: Platform) -> Option<KeyCommand> {
    if matches!(input.key, Key::Char('a') | Key::Char('A'))
        && input.platform_modifier(platform)
        && focus != FocusTarget::TextInput
    {
        return Some(KeyCommand::SelectAll);
    }

    if focus != FocusTarget::Surface {
        return None;
    }

    match input.key {
        Key::ArrowDown => Some(KeyCommand::Move { delta: 1, extend: input.shift }),
        Key::ArrowUp => Some(KeyCommand::Move { delta: -1, extend: input.shift }),
        Key::Enter => Some(KeyCommand::Activate),
        _ => None,
    }
}

/// Next active index, clamped to the list. With nothing active yet, either
/// direction lands on the first row.
pub fn step(active: Option<usize>, delta: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match active {
        None => Some(0),
        Some(current) => {
            let current = current.min(last);
            let next = if delta < 0 {
                current.saturating_sub(delta.unsigned_abs())
            } else {
                current.saturating_add(delta as usize).min(last)
            };
            Some(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn select_all_is_global_but_not_in_text_inputs() {
        let combo = KeyInput::new(Key::Char('a')).ctrl();
        assert_eq!(interpret(&combo, FocusTarget::Elsewhere, Platform::Other), Some(KeyCommand::SelectAll));
        assert_eq!(interpret(&combo, FocusTarget::Surface, Platform::Other), Some(KeyCommand::SelectAll));
        assert_eq!(interpret(&combo, FocusTarget::TextInput, Platform::Other), None);
    }

    #[test]
    fn select_all_uses_platform_modifier() {
        let ctrl = KeyInput::new(Key::Char('A')).ctrl();
        let cmd = KeyInput::new(Key::Char('a')).meta();
        assert_eq!(interpret(&ctrl, FocusTarget::Surface, Platform::Mac), None);
        assert_eq!(interpret(&cmd, FocusTarget::Surface, Platform::Mac), Some(KeyCommand::SelectAll));
    }

    #[test]
    fn arrows_need_surface_focus() {
        let down = KeyInput::new(Key::ArrowDown);
        assert_eq!(interpret(&down, FocusTarget::Elsewhere, Platform::Other), None);
        assert_eq!(
            interpret(&down.shift(), FocusTarget::Surface, Platform::Other),
            Some(KeyCommand::Move { delta: 1, extend: true })
        );
        assert_eq!(
            interpret(&KeyInput::new(Key::Enter), FocusTarget::Surface, Platform::Other),
            Some(KeyCommand::Activate)
        );
        assert_eq!(interpret(&KeyInput::new(Key::Char('x')), FocusTarget::Surface, Platform::Other), None);
    }

    #[test]
    fn step_clamps() {
        assert_eq!(step(None, 1, 3), Some(0));
        assert_eq!(step(None, -1, 3), Some(0));
        assert_eq!(step(Some(2), 1, 3), Some(2));
        assert_eq!(step(Some(0), -1, 3), Some(0));
        assert_eq!(step(Some(1), 1, 3), Some(2));
        assert_eq!(step(Some(9), -1, 3), Some(1));
        assert_eq!(step(Some(0), 1, 0), None);
    }

    #[test]
    fn crossterm_mapping() {
        let event = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        let input = KeyInput::from_crossterm(&event).unwrap();
        assert_eq!(input, KeyInput::new(Key::ArrowDown).shift());

        let release = KeyEvent { kind: KeyEventKind::Release, ..event };
        assert!(KeyInput::from_crossterm(&release).is_none());
    }
}
