//! Application actions and key mapping.
//!
//! Keys the focused widget does not consume are mapped to app-level
//! [`Action`]s through a [`KeyMapper`]. While a text field is focused,
//! printable keys belong to the field and never reach the mapper.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// App-level actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Focus the next focusable element
    FocusNext,
    /// Focus the previous focusable element
    FocusPrev,
    /// Activate the focused element
    Select,
    /// Dismiss / leave the focused element
    Cancel,
    /// No operation
    #[default]
    None,
}

/// Trait for mapping key events to actions.
///
/// Implement this to provide custom key bindings.
pub trait KeyMapper {
    /// Map a key event to an action.
    ///
    /// Returns [`Action::None`] if the key is not bound.
    fn map_key(&self, key: KeyEvent) -> Action;
}

/// Default key mapper with standard bindings.
///
/// | Key | Action |
/// |-----|--------|
/// | `q`, `Ctrl+c` | Quit |
/// | `Tab` | Focus Next |
/// | `Shift+Tab` | Focus Previous |
/// | `Enter` | Select |
/// | `Esc` | Cancel |
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultKeyMapper;

impl DefaultKeyMapper {
    /// Create a new default key mapper.
    pub fn new() -> Self {
        Self
    }
}

impl KeyMapper for DefaultKeyMapper {
    fn map_key(&self, key: KeyEvent) -> Action {
        // Check for Ctrl+c first
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') = key.code {
                return Action::Quit;
            }
        }

        // Check for Shift+Tab
        if key.modifiers.contains(KeyModifiers::SHIFT) {
            if let KeyCode::BackTab = key.code {
                return Action::FocusPrev;
            }
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrev,
            KeyCode::Enter => Action::Select,
            KeyCode::Esc => Action::Cancel,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_default_mapper_quit() {
        let mapper = DefaultKeyMapper::new();

        assert_eq!(mapper.map_key(key_event(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            mapper.map_key(key_event_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Action::Quit
        );
    }

    #[test]
    fn test_default_mapper_focus() {
        let mapper = DefaultKeyMapper::new();

        assert_eq!(mapper.map_key(key_event(KeyCode::Tab)), Action::FocusNext);
        assert_eq!(
            mapper.map_key(key_event_with_modifiers(
                KeyCode::BackTab,
                KeyModifiers::SHIFT
            )),
            Action::FocusPrev
        );
    }

    #[test]
    fn test_default_mapper_selection() {
        let mapper = DefaultKeyMapper::new();

        assert_eq!(mapper.map_key(key_event(KeyCode::Enter)), Action::Select);
        assert_eq!(mapper.map_key(key_event(KeyCode::Esc)), Action::Cancel);
    }

    #[test]
    fn test_default_mapper_unmapped() {
        let mapper = DefaultKeyMapper::new();

        // Printable keys are widget input, not hotkeys
        assert_eq!(mapper.map_key(key_event(KeyCode::Char('x'))), Action::None);
        assert_eq!(mapper.map_key(key_event(KeyCode::F(1))), Action::None);
        assert_eq!(mapper.map_key(key_event(KeyCode::Down)), Action::None);
    }

    #[test]
    fn test_action_default() {
        assert_eq!(Action::default(), Action::None);
    }
}
