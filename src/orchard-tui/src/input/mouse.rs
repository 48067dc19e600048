//! Mouse event handling.
//!
//! Translates raw crossterm mouse events into the semantic actions the
//! application consumes.

use crossterm::event::{MouseButton as CrosstermButton, MouseEvent, MouseEventKind};

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary)
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

impl From<CrosstermButton> for MouseButton {
    fn from(button: CrosstermButton) -> Self {
        match button {
            CrosstermButton::Left => MouseButton::Left,
            CrosstermButton::Right => MouseButton::Right,
            CrosstermButton::Middle => MouseButton::Middle,
        }
    }
}

/// High-level mouse actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    /// Button pressed at position
    Click {
        /// X coordinate (column)
        x: u16,
        /// Y coordinate (row)
        y: u16,
        /// Which button was pressed
        button: MouseButton,
    },
}

/// Translates crossterm mouse events into [`MouseAction`]s.
///
/// Selection happens on button-down, mirroring the widget's
/// pointer-activation contract: the commit must land before any
/// focus-loss handling.
#[derive(Debug, Default)]
pub struct MouseHandler;

impl MouseHandler {
    /// Create a new mouse handler.
    pub fn new() -> Self {
        Self
    }

    /// Process a raw mouse event.
    pub fn handle(&mut self, event: MouseEvent) -> Option<MouseAction> {
        match event.kind {
            MouseEventKind::Down(button) => Some(MouseAction::Click {
                x: event.column,
                y: event.row,
                button: button.into(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse_event(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 3,
            row: 9,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_down_becomes_click() {
        let mut handler = MouseHandler::new();
        let action = handler.handle(mouse_event(MouseEventKind::Down(CrosstermButton::Left)));
        assert_eq!(
            action,
            Some(MouseAction::Click {
                x: 3,
                y: 9,
                button: MouseButton::Left,
            })
        );
    }

    #[test]
    fn test_other_kinds_are_ignored() {
        let mut handler = MouseHandler::new();
        assert_eq!(
            handler.handle(mouse_event(MouseEventKind::Up(CrosstermButton::Left))),
            None
        );
        assert_eq!(
            handler.handle(mouse_event(MouseEventKind::Moved)),
            None
        );
        assert_eq!(handler.handle(mouse_event(MouseEventKind::ScrollDown)), None);
    }

    #[test]
    fn test_button_mapping() {
        assert_eq!(MouseButton::from(CrosstermButton::Right), MouseButton::Right);
        assert_eq!(
            MouseButton::from(CrosstermButton::Middle),
            MouseButton::Middle
        );
    }
}
