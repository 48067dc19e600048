//! Core Component trait and types.
//!
//! Interactive components implement [`Component`], which gives the event
//! loop a single interface for rendering, key routing, and focus.

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Result of handling a key event in a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentResult<T = ()> {
    /// Component handled the event, continue displaying
    Handled,
    /// Component did not handle the event, propagate to the app mapper
    NotHandled,
    /// Component completed with a value
    Done(T),
    /// Component dismissed its transient UI (e.g. Escape on a popup)
    Cancelled,
}

impl<T> ComponentResult<T> {
    /// Returns true if the component consumed the event.
    pub fn is_handled(&self) -> bool {
        !matches!(self, ComponentResult::NotHandled)
    }

    /// Returns true if the component completed or was cancelled.
    pub fn is_done(&self) -> bool {
        matches!(self, ComponentResult::Done(_) | ComponentResult::Cancelled)
    }

    /// Maps the inner value if `Done`.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ComponentResult<U> {
        match self {
            ComponentResult::Handled => ComponentResult::Handled,
            ComponentResult::NotHandled => ComponentResult::NotHandled,
            ComponentResult::Done(value) => ComponentResult::Done(f(value)),
            ComponentResult::Cancelled => ComponentResult::Cancelled,
        }
    }
}

/// Focus state of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Component is not focused
    #[default]
    Unfocused,
    /// Component has focus
    Focused,
    /// Component has focus and accepts text input
    Editing,
}

impl FocusState {
    /// Returns true if the component has any form of focus.
    pub fn has_focus(&self) -> bool {
        !matches!(self, FocusState::Unfocused)
    }

    /// Returns true if the component is in editing mode.
    pub fn is_editing(&self) -> bool {
        matches!(self, FocusState::Editing)
    }
}

/// Core trait for interactive components.
pub trait Component {
    /// The value this component produces when it completes.
    type Output;

    /// Render the component into the buffer.
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output>;

    /// Current focus state.
    fn focus_state(&self) -> FocusState;

    /// Give or take focus.
    fn set_focus(&mut self, focused: bool);

    /// Key hints to display for this component, as (key, description).
    fn key_hints(&self) -> Vec<(&'static str, &'static str)>;

    /// Handle pasted text. Returns true if consumed.
    fn handle_paste(&mut self, _text: &str) -> bool {
        false
    }
}
