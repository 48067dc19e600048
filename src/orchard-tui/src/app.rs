//! Application state and event dispatch.
//!
//! [`AppState`] owns the combo box, the focus routing and the layout
//! recorded by the host view for mouse hit-testing. Dispatch is pure
//! state-in/state-out so the whole interaction surface is testable
//! without a terminal.

use std::time::Instant;

use crossterm::event::KeyEvent;
use orchard_components::prelude::*;
use orchard_core::events::{Action, DefaultKeyMapper, KeyMapper};

use crate::views::host::HostLayout;

/// The fixed option set.
pub const OPTIONS: [&str; 6] = [
    "Apple",
    "Banana",
    "Orange",
    "Grape",
    "Strawberry",
    "Watermelon",
];

/// Top-level application state.
pub struct AppState {
    /// The mounted combo box
    pub combo: ComboBoxState,
    /// Geometry of the last rendered frame, for hit-testing
    pub layout: HostLayout,
    /// The most recently committed option
    pub last_committed: Option<String>,
    key_mapper: DefaultKeyMapper,
    quit: bool,
}

impl AppState {
    /// Create the application state with the fixed option set.
    pub fn new() -> Self {
        let combo = ComboBoxState::new(OPTIONS.into_iter().map(String::from).collect())
            .with_placeholder("Type to filter…");
        Self {
            combo,
            layout: HostLayout::default(),
            last_committed: None,
            key_mapper: DefaultKeyMapper::new(),
            quit: false,
        }
    }

    /// Whether the application should exit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Dispatch a key event. Returns true when a redraw is needed.
    ///
    /// The focused combo box gets the key first; only unconsumed keys go
    /// through the app-level mapper, so typing `q` filters instead of
    /// quitting.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if self.combo.is_focused() {
            match self.combo.handle_key(key) {
                ComponentResult::Done(value) => {
                    self.record_commit(value);
                    return true;
                }
                ComponentResult::Handled | ComponentResult::Cancelled => return true,
                ComponentResult::NotHandled => {}
            }
        }

        match self.key_mapper.map_key(key) {
            Action::Quit => {
                self.quit = true;
                true
            }
            Action::FocusNext | Action::FocusPrev => {
                if self.combo.is_focused() {
                    self.combo.blur(now);
                } else {
                    self.combo.focus();
                }
                true
            }
            Action::Select => {
                // Enter on the unfocused page focuses the field
                if !self.combo.is_focused() {
                    self.combo.focus();
                    true
                } else {
                    false
                }
            }
            Action::Cancel => {
                // Esc with the list already closed leaves the field
                if self.combo.is_focused() {
                    self.combo.blur(now);
                    true
                } else {
                    false
                }
            }
            Action::None => false,
        }
    }

    /// Dispatch a left click. Returns true when a redraw is needed.
    ///
    /// A click on an option row commits it before the blur is armed, so
    /// the deferred close can never swallow the selection.
    pub fn handle_click(&mut self, x: u16, y: u16, now: Instant) -> bool {
        if let Some(row) = self.layout.combo.hit_option(x, y) {
            if let Some(value) = self.combo.commit_option(row) {
                self.record_commit(value);
            }
            self.combo.blur(now);
            true
        } else if self.layout.combo.hit_field(x, y) {
            // A click on an already-focused field fires no focus event
            if self.combo.is_focused() {
                false
            } else {
                self.combo.focus();
                true
            }
        } else {
            let was_focused = self.combo.is_focused();
            self.combo.blur(now);
            was_focused
        }
    }

    /// Dispatch pasted text into the focused field.
    pub fn handle_paste(&mut self, text: &str) -> bool {
        self.combo.is_focused() && self.combo.handle_paste(text)
    }

    /// Advance deferred state. Returns true when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.combo.apply_deferred_close(now)
    }

    fn record_commit(&mut self, value: String) {
        tracing::debug!(%value, "option committed");
        self.last_committed = Some(value);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
