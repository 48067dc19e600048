//! Filterable combo box component.
//!
//! A text field paired with a suggestion list filtered by the field's
//! text: typing filters the fixed option set (case-insensitive substring,
//! original order), Up/Down move the highlight, Enter or a mouse click
//! commits the highlighted option into the field, Escape dismisses the
//! list. Losing focus closes the list through a short deferred deadline so
//! a click-selection already in flight always lands first.

use std::time::{Duration, Instant};

use crate::borders::BorderStyle;
use crate::component::{Component, ComponentResult, FocusState};
use crate::input::InputState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use orchard_core::style::{ACCENT, SURFACE_1, SURFACE_2, TEXT, TEXT_MUTED};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Clear, Widget};

/// Delay between the field losing focus and the list closing.
///
/// The exact value is not load-bearing: it only has to be long enough for
/// a click-selection already dispatched to commit first (clicks disarm the
/// deadline), and short enough to feel instantaneous.
pub const BLUR_CLOSE_DELAY: Duration = Duration::from_millis(120);

/// Placeholder row shown when no option matches the query.
pub const NO_RESULTS: &str = "No results";

/// Height of the rendered field (one text row plus borders).
const FIELD_HEIGHT: u16 = 3;

// ============================================================
// STATE
// ============================================================

/// State for a combo box.
///
/// Owns the option set, the query text, the filtered view and the
/// highlight. Every mutation keeps the highlight inside
/// `[0, visible_len - 1]` or at `None`.
#[derive(Debug, Clone)]
pub struct ComboBoxState {
    /// The fixed option set, never mutated after construction
    options: Vec<String>,
    /// Query text and cursor
    input: InputState,
    /// Indices into `options` matching the query, in option order
    visible: Vec<usize>,
    /// Highlighted position within `visible`
    highlight: Option<usize>,
    /// Whether the suggestion list is shown
    open: bool,
    /// Whether the field has focus
    focused: bool,
    /// Armed by blur; a due tick closes the list
    close_deadline: Option<Instant>,
}

impl ComboBoxState {
    /// Create a combo box over a fixed option set.
    pub fn new(options: Vec<String>) -> Self {
        let visible = (0..options.len()).collect();
        Self {
            options,
            input: InputState::new(),
            visible,
            highlight: None,
            open: false,
            focused: false,
            close_deadline: None,
        }
    }

    /// Set placeholder text for the empty field.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input = self.input.with_placeholder(placeholder);
        self
    }

    /// The option set.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        &self.input.value
    }

    /// The options currently matching the query, in option order.
    pub fn visible_options(&self) -> Vec<&str> {
        self.visible
            .iter()
            .map(|&idx| self.options[idx].as_str())
            .collect()
    }

    /// Number of options currently matching the query.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Highlighted position within the visible options, if any.
    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Text of the highlighted option (the active descendant), if any.
    pub fn active_option(&self) -> Option<&str> {
        let idx = self.highlight?;
        self.visible
            .get(idx)
            .map(|&option_idx| self.options[option_idx].as_str())
    }

    /// Whether the suggestion list is expanded.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the field has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether a blur close is armed and not yet applied.
    pub fn close_pending(&self) -> bool {
        self.close_deadline.is_some()
    }

    // ------------------------------------------------------------
    // Focus lifecycle
    // ------------------------------------------------------------

    /// Focus the field: opens the list and disarms any pending close.
    /// Query and filtered options are untouched.
    pub fn focus(&mut self) {
        self.focused = true;
        self.open = true;
        self.close_deadline = None;
    }

    /// Blur the field: arms the deferred close instead of closing
    /// synchronously, so a click-selection dispatched before the deadline
    /// still commits.
    pub fn blur(&mut self, now: Instant) {
        if !self.focused {
            return;
        }
        self.focused = false;
        self.close_deadline = Some(now + BLUR_CLOSE_DELAY);
    }

    /// Apply a due deferred close. Returns true if the list was closed.
    pub fn apply_deferred_close(&mut self, now: Instant) -> bool {
        match self.close_deadline {
            Some(deadline) if now >= deadline => {
                self.close_deadline = None;
                let was_open = self.open;
                self.open = false;
                was_open
            }
            _ => false,
        }
    }

    // ------------------------------------------------------------
    // Query and filtering
    // ------------------------------------------------------------

    /// Replace the query text, recomputing the filtered options and
    /// resetting the highlight.
    pub fn set_query(&mut self, query: &str) {
        self.input.set_value(query);
        self.refilter();
    }

    fn refilter(&mut self) {
        let needle = self.input.value.to_lowercase();
        self.visible = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.to_lowercase().contains(&needle))
            .map(|(idx, _)| idx)
            .collect();
        self.highlight = None;
    }

    /// Run an edit against the input; refilter only if the text changed,
    /// so cursor-only keys never reset the highlight.
    fn edit(&mut self, op: impl FnOnce(&mut InputState)) {
        let before = self.input.value.clone();
        op(&mut self.input);
        if self.input.value != before {
            self.refilter();
        }
    }

    // ------------------------------------------------------------
    // Highlight navigation
    // ------------------------------------------------------------

    /// Move the highlight toward the end, clamped at the last visible
    /// option. From no highlight, moves to 0. No-op on an empty list.
    pub fn highlight_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() - 1;
        self.highlight = Some(match self.highlight {
            None => 0,
            Some(idx) => (idx + 1).min(last),
        });
    }

    /// Move the highlight toward the start, clamped at 0. From no
    /// highlight, moves to 0. No-op on an empty list.
    pub fn highlight_prev(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.highlight = Some(match self.highlight {
            None => 0,
            Some(idx) => idx.saturating_sub(1),
        });
    }

    // ------------------------------------------------------------
    // Commit and dismiss
    // ------------------------------------------------------------

    /// Commit the highlighted option: the field takes its text (which
    /// refilters and resets the highlight) and the list closes. Returns
    /// the committed text, or `None` when nothing is highlighted.
    pub fn commit_highlighted(&mut self) -> Option<String> {
        let idx = self.highlight?;
        self.commit_visible(idx)
    }

    /// Commit the visible option at `row` (pointer activation). A commit
    /// disarms any pending blur close, so it can never be swallowed by it.
    pub fn commit_option(&mut self, row: usize) -> Option<String> {
        self.commit_visible(row)
    }

    fn commit_visible(&mut self, row: usize) -> Option<String> {
        let option_idx = *self.visible.get(row)?;
        let text = self.options[option_idx].clone();
        self.set_query(&text);
        self.open = false;
        self.close_deadline = None;
        Some(text)
    }

    /// Dismiss the list. Query and highlight are untouched.
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

impl Component for ComboBoxState {
    type Output = String;

    fn render(&self, area: Rect, buf: &mut Buffer) {
        ComboBox::new(self).render(area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<String> {
        // App chords (Ctrl+c etc.) stay app-level
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return ComponentResult::NotHandled;
        }

        match key.code {
            KeyCode::Down => {
                self.highlight_next();
                ComponentResult::Handled
            }
            KeyCode::Up => {
                self.highlight_prev();
                ComponentResult::Handled
            }
            KeyCode::Enter => match self.commit_highlighted() {
                Some(text) => ComponentResult::Done(text),
                // Nothing highlighted: no effect
                None => ComponentResult::Handled,
            },
            KeyCode::Esc => {
                if self.open {
                    self.dismiss();
                    ComponentResult::Cancelled
                } else {
                    ComponentResult::NotHandled
                }
            }
            KeyCode::Char(c) => {
                self.edit(|input| input.insert(c));
                ComponentResult::Handled
            }
            KeyCode::Backspace => {
                self.edit(InputState::backspace);
                ComponentResult::Handled
            }
            KeyCode::Delete => {
                self.edit(InputState::delete);
                ComponentResult::Handled
            }
            KeyCode::Left => {
                self.input.move_left();
                ComponentResult::Handled
            }
            KeyCode::Right => {
                self.input.move_right();
                ComponentResult::Handled
            }
            KeyCode::Home => {
                self.input.move_home();
                ComponentResult::Handled
            }
            KeyCode::End => {
                self.input.move_end();
                ComponentResult::Handled
            }
            _ => ComponentResult::NotHandled,
        }
    }

    fn focus_state(&self) -> FocusState {
        if self.focused {
            FocusState::Editing
        } else {
            FocusState::Unfocused
        }
    }

    fn set_focus(&mut self, focused: bool) {
        if focused {
            self.focus();
        } else {
            self.blur(Instant::now());
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("↑↓", "Navigate"),
            ("Enter", "Select"),
            ("Esc", "Dismiss"),
            ("Tab", "Leave field"),
        ]
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        self.edit(|input| input.insert_str(text));
        true
    }
}

// ============================================================
// LAYOUT
// ============================================================

/// Rendered geometry of a combo box, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComboBoxLayout {
    /// The bordered field rectangle
    pub field: Rect,
    /// Inner row area of the open list (empty when closed)
    pub list: Rect,
    /// Number of selectable rows shown (0 for the placeholder row)
    pub rows: usize,
}

impl ComboBoxLayout {
    /// Whether (x, y) falls on the field.
    pub fn hit_field(&self, x: u16, y: u16) -> bool {
        contains(self.field, x, y)
    }

    /// The visible-option row at (x, y), if any. The placeholder row is
    /// not selectable.
    pub fn hit_option(&self, x: u16, y: u16) -> Option<usize> {
        if self.rows == 0 || !contains(self.list, x, y) {
            return None;
        }
        let row = (y - self.list.y) as usize;
        (row < self.rows).then_some(row)
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

// ============================================================
// WIDGET
// ============================================================

/// The combo box widget: field on top, suggestion list popup beneath it
/// while the state is open.
pub struct ComboBox<'a> {
    state: &'a ComboBoxState,
    border: BorderStyle,
}

impl<'a> ComboBox<'a> {
    /// Create a combo box widget over its state.
    pub fn new(state: &'a ComboBoxState) -> Self {
        Self {
            state,
            border: BorderStyle::Rounded,
        }
    }

    /// Override the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Compute the geometry this widget occupies within `area`.
    pub fn layout(&self, area: Rect) -> ComboBoxLayout {
        let field = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: FIELD_HEIGHT.min(area.height),
        };

        if !self.state.open || area.height <= FIELD_HEIGHT {
            return ComboBoxLayout {
                field,
                list: Rect::default(),
                rows: 0,
            };
        }

        let rows = self.state.visible.len().max(1) as u16;
        let below = area.height - FIELD_HEIGHT;
        let outer_height = (rows + 2).min(below);
        let outer = Rect {
            x: area.x,
            y: field.bottom(),
            width: area.width,
            height: outer_height,
        };
        let inner = Rect {
            x: outer.x + 1,
            y: outer.y + 1,
            width: outer.width.saturating_sub(2),
            height: outer.height.saturating_sub(2),
        };

        ComboBoxLayout {
            field,
            list: inner,
            rows: self.state.visible.len().min(inner.height as usize),
        }
    }

    fn render_field(&self, field: Rect, buf: &mut Buffer) {
        let block = self.border.block(self.state.focused);
        let inner = block.inner(field);
        block.render(field, buf);

        for y in inner.y..inner.bottom() {
            for x in inner.x..inner.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(SURFACE_1);
                }
            }
        }
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Expansion indicator in the last column
        let indicator = if self.state.open { '▾' } else { '▸' };
        let indicator_color = if self.state.open { ACCENT } else { TEXT_MUTED };
        if let Some(cell) = buf.cell_mut((inner.right().saturating_sub(1), inner.y)) {
            cell.set_char(indicator)
                .set_style(Style::default().fg(indicator_color).bg(SURFACE_1));
        }

        // Query text, or the placeholder while empty
        let text_width = inner.width.saturating_sub(2) as usize;
        let (text, text_style) = if self.state.input.value.is_empty() {
            let placeholder = self.state.input.placeholder.as_deref().unwrap_or("");
            (
                placeholder,
                Style::default()
                    .fg(TEXT_MUTED)
                    .bg(SURFACE_1)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            (
                self.state.input.value.as_str(),
                Style::default().fg(TEXT).bg(SURFACE_1),
            )
        };

        let mut x = inner.x;
        for ch in text.chars().take(text_width) {
            if let Some(cell) = buf.cell_mut((x, inner.y)) {
                cell.set_char(ch).set_style(text_style);
            }
            x += 1;
        }

        // Cursor while editing
        if self.state.focused {
            let cursor_x = inner.x + (self.state.input.cursor as u16).min(text_width as u16);
            if let Some(cell) = buf.cell_mut((cursor_x, inner.y)) {
                cell.set_style(
                    Style::default()
                        .fg(TEXT)
                        .bg(SURFACE_1)
                        .add_modifier(Modifier::REVERSED),
                );
            }
        }
    }

    fn render_list(&self, layout: &ComboBoxLayout, buf: &mut Buffer) {
        if layout.list.width == 0 || layout.list.height == 0 {
            return;
        }

        let outer = Rect {
            x: layout.list.x - 1,
            y: layout.list.y - 1,
            width: layout.list.width + 2,
            height: layout.list.height + 2,
        };
        Clear.render(outer, buf);
        self.border.block(self.state.focused).render(outer, buf);

        let inner = layout.list;
        if self.state.visible.is_empty() {
            self.render_placeholder_row(inner, buf);
            return;
        }

        for row in 0..layout.rows {
            let y = inner.y + row as u16;
            let is_highlighted = self.state.highlight == Some(row);
            self.render_option_row(row, is_highlighted, inner, y, buf);
        }
    }

    fn render_option_row(
        &self,
        row: usize,
        is_highlighted: bool,
        inner: Rect,
        y: u16,
        buf: &mut Buffer,
    ) {
        let bg = if is_highlighted { SURFACE_2 } else { SURFACE_1 };
        for x in inner.x..inner.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(bg);
            }
        }

        // Selection indicator tied to the highlight
        if is_highlighted {
            if let Some(cell) = buf.cell_mut((inner.x, y)) {
                cell.set_char('>')
                    .set_style(Style::default().fg(ACCENT).bg(bg));
            }
        }

        let label_style = if is_highlighted {
            Style::default()
                .fg(ACCENT)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT).bg(bg)
        };

        let option_idx = self.state.visible[row];
        let mut x = inner.x + 2;
        for ch in self.state.options[option_idx].chars() {
            if x >= inner.right() {
                break;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(ch).set_style(label_style);
            }
            x += 1;
        }
    }

    fn render_placeholder_row(&self, inner: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(TEXT_MUTED).bg(SURFACE_1);
        for x in inner.x..inner.right() {
            if let Some(cell) = buf.cell_mut((x, inner.y)) {
                cell.set_bg(SURFACE_1);
            }
        }
        let mut x = inner.x + 1;
        for ch in NO_RESULTS.chars() {
            if x >= inner.right() {
                break;
            }
            if let Some(cell) = buf.cell_mut((x, inner.y)) {
                cell.set_char(ch).set_style(style);
            }
            x += 1;
        }
    }
}

impl Widget for ComboBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let layout = self.layout(area);
        self.render_field(layout.field, buf);
        if self.state.open {
            self.render_list(&layout, buf);
        }
    }
}

// ============================================================
// TESTS
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn fruit_state() -> ComboBoxState {
        ComboBoxState::new(
            ["Apple", "Banana", "Orange", "Grape", "Strawberry", "Watermelon"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(state: &mut ComboBoxState, text: &str) {
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
    }

    // ------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------

    #[test]
    fn test_empty_query_shows_all_options() {
        let state = fruit_state();
        assert_eq!(state.visible_len(), 6);
        assert_eq!(state.highlight(), None);
    }

    #[test]
    fn test_filter_an() {
        let mut state = fruit_state();
        state.set_query("an");
        assert_eq!(state.visible_options(), vec!["Banana", "Orange"]);
    }

    #[test]
    fn test_filter_ra() {
        let mut state = fruit_state();
        state.set_query("ra");
        assert_eq!(
            state.visible_options(),
            vec!["Orange", "Grape", "Strawberry"]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut state = fruit_state();
        state.set_query("APPLE");
        assert_eq!(state.visible_options(), vec!["Apple"]);

        state.set_query("waterMELON");
        assert_eq!(state.visible_options(), vec!["Watermelon"]);
    }

    #[test]
    fn test_filter_no_match() {
        let mut state = fruit_state();
        state.set_query("xyz");
        assert_eq!(state.visible_len(), 0);
        assert_eq!(state.highlight(), None);
    }

    #[test]
    fn test_text_change_resets_highlight() {
        let mut state = fruit_state();
        state.focus();
        state.highlight_next();
        state.highlight_next();
        assert_eq!(state.highlight(), Some(1));

        type_str(&mut state, "a");
        assert_eq!(state.highlight(), None);
    }

    #[test]
    fn test_cursor_moves_do_not_reset_highlight() {
        let mut state = fruit_state();
        state.focus();
        type_str(&mut state, "an");
        state.highlight_next();
        assert_eq!(state.highlight(), Some(0));

        state.handle_key(key(KeyCode::Left));
        state.handle_key(key(KeyCode::Home));
        assert_eq!(state.highlight(), Some(0));

        // Backspace at the start changes nothing, so no reset either
        state.handle_key(key(KeyCode::Backspace));
        assert_eq!(state.highlight(), Some(0));
    }

    // ------------------------------------------------------------
    // Highlight navigation
    // ------------------------------------------------------------

    #[test]
    fn test_highlight_next_clamps_at_end() {
        let mut state = fruit_state();
        state.set_query("an");
        for _ in 0..5 {
            state.highlight_next();
        }
        assert_eq!(state.highlight(), Some(1));
    }

    #[test]
    fn test_highlight_prev_clamps_at_start() {
        let mut state = fruit_state();
        // From none, up moves to 0 (clamp-at-0 rule)
        state.highlight_prev();
        assert_eq!(state.highlight(), Some(0));

        state.highlight_prev();
        assert_eq!(state.highlight(), Some(0));
    }

    #[test]
    fn test_highlight_noop_on_empty_list() {
        let mut state = fruit_state();
        state.set_query("xyz");
        state.highlight_next();
        state.highlight_prev();
        assert_eq!(state.highlight(), None);
    }

    // ------------------------------------------------------------
    // Commit and dismiss
    // ------------------------------------------------------------

    #[test]
    fn test_enter_without_highlight_is_noop() {
        let mut state = fruit_state();
        state.focus();
        type_str(&mut state, "gr");
        let open_before = state.is_open();

        let result = state.handle_key(key(KeyCode::Enter));
        assert_eq!(result, ComponentResult::Handled);
        assert_eq!(state.query(), "gr");
        assert_eq!(state.is_open(), open_before);
    }

    #[test]
    fn test_arrow_arrow_enter_commits_second_option() {
        let mut state = fruit_state();
        state.focus();
        state.handle_key(key(KeyCode::Down));
        state.handle_key(key(KeyCode::Down));
        let result = state.handle_key(key(KeyCode::Enter));

        assert_eq!(result, ComponentResult::Done("Banana".into()));
        assert_eq!(state.query(), "Banana");
        assert!(!state.is_open());
        assert_eq!(state.highlight(), None);
    }

    #[test]
    fn test_three_arrows_enter_commits_third_option() {
        let mut state = fruit_state();
        state.focus();
        for _ in 0..3 {
            state.handle_key(key(KeyCode::Down));
        }
        let result = state.handle_key(key(KeyCode::Enter));
        assert_eq!(result, ComponentResult::Done("Orange".into()));
    }

    #[test]
    fn test_commit_refilters_to_committed_text() {
        let mut state = fruit_state();
        state.focus();
        state.highlight_next();
        state.commit_highlighted();
        assert_eq!(state.query(), "Apple");
        assert_eq!(state.visible_options(), vec!["Apple"]);
    }

    #[test]
    fn test_escape_closes_without_touching_query() {
        let mut state = fruit_state();
        state.focus();
        type_str(&mut state, "gr");
        state.highlight_next();

        let result = state.handle_key(key(KeyCode::Esc));
        assert_eq!(result, ComponentResult::Cancelled);
        assert!(!state.is_open());
        assert_eq!(state.query(), "gr");
        assert_eq!(state.highlight(), Some(0));
        assert!(state.is_focused());
    }

    #[test]
    fn test_escape_with_closed_list_is_not_handled() {
        let mut state = fruit_state();
        state.focus();
        state.handle_key(key(KeyCode::Esc));
        let result = state.handle_key(key(KeyCode::Esc));
        assert_eq!(result, ComponentResult::NotHandled);
    }

    #[test]
    fn test_enter_after_escape_still_commits_highlight() {
        // The highlight survives a dismissal, so Enter commits it even
        // with the list closed
        let mut state = fruit_state();
        state.focus();
        state.handle_key(key(KeyCode::Down));
        state.handle_key(key(KeyCode::Esc));

        let result = state.handle_key(key(KeyCode::Enter));
        assert_eq!(result, ComponentResult::Done("Apple".into()));
    }

    #[test]
    fn test_pointer_commit() {
        let mut state = fruit_state();
        state.focus();
        type_str(&mut state, "g");
        assert_eq!(state.visible_options(), vec!["Orange", "Grape"]);

        let committed = state.commit_option(1);
        assert_eq!(committed, Some("Grape".into()));
        assert_eq!(state.query(), "Grape");
        assert!(!state.is_open());
    }

    #[test]
    fn test_commit_out_of_range_is_noop() {
        let mut state = fruit_state();
        state.focus();
        type_str(&mut state, "xyz");
        assert_eq!(state.commit_option(0), None);
        assert_eq!(state.query(), "xyz");
    }

    // ------------------------------------------------------------
    // Focus and the deferred close
    // ------------------------------------------------------------

    #[test]
    fn test_focus_opens_without_touching_query() {
        let mut state = fruit_state();
        state.set_query("an");
        state.focus();
        assert!(state.is_open());
        assert_eq!(state.query(), "an");
        assert_eq!(state.visible_options(), vec!["Banana", "Orange"]);
    }

    #[test]
    fn test_blur_defers_the_close() {
        let mut state = fruit_state();
        state.focus();
        let now = Instant::now();
        state.blur(now);

        assert!(state.is_open(), "blur must not close synchronously");
        assert!(state.close_pending());

        // Not due yet
        assert!(!state.apply_deferred_close(now));
        assert!(state.is_open());

        // Due
        assert!(state.apply_deferred_close(now + BLUR_CLOSE_DELAY));
        assert!(!state.is_open());
        assert!(!state.close_pending());
    }

    #[test]
    fn test_refocus_disarms_pending_close() {
        let mut state = fruit_state();
        state.focus();
        let now = Instant::now();
        state.blur(now);
        state.focus();

        assert!(!state.close_pending());
        assert!(!state.apply_deferred_close(now + BLUR_CLOSE_DELAY));
        assert!(state.is_open());
    }

    #[test]
    fn test_click_commit_beats_deferred_close() {
        let mut state = fruit_state();
        state.focus();
        type_str(&mut state, "g");

        // The click commits, then the blur fires, then the deadline passes
        let now = Instant::now();
        let committed = state.commit_option(1);
        state.blur(now);
        state.apply_deferred_close(now + BLUR_CLOSE_DELAY);

        assert_eq!(committed, Some("Grape".into()));
        assert_eq!(state.query(), "Grape");
        assert!(!state.is_open());
    }

    #[test]
    fn test_blur_when_unfocused_is_noop() {
        let mut state = fruit_state();
        state.blur(Instant::now());
        assert!(!state.close_pending());
    }

    // ------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------

    const WIDTH: u16 = 30;
    const HEIGHT: u16 = 14;

    fn render_to_buffer(state: &ComboBoxState) -> (Buffer, ComboBoxLayout) {
        let area = Rect::new(0, 0, WIDTH, HEIGHT);
        let mut buf = Buffer::empty(area);
        let widget = ComboBox::new(state);
        let layout = widget.layout(area);
        widget.render(area, &mut buf);
        (buf, layout)
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..WIDTH)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn test_render_closed_has_no_list() {
        let state = fruit_state();
        let (buf, layout) = render_to_buffer(&state);

        assert_eq!(layout.list, Rect::default());
        assert_eq!(layout.rows, 0);
        let below_field = row_text(&buf, 3);
        assert_eq!(below_field.trim(), "");
    }

    #[test]
    fn test_render_open_shows_options_and_indicator() {
        let mut state = fruit_state();
        state.focus();
        let (buf, layout) = render_to_buffer(&state);

        assert_eq!(layout.rows, 6);
        assert!(row_text(&buf, 1).contains('▾'));
        assert!(row_text(&buf, layout.list.y).contains("Apple"));
        assert!(row_text(&buf, layout.list.y + 5).contains("Watermelon"));
    }

    #[test]
    fn test_render_highlight_marker_tracks_highlight() {
        let mut state = fruit_state();
        state.focus();
        state.highlight_next();
        state.highlight_next();
        let (buf, layout) = render_to_buffer(&state);

        let highlighted = row_text(&buf, layout.list.y + 1);
        assert!(highlighted.contains('>'));
        assert!(highlighted.contains("Banana"));

        let unhighlighted = row_text(&buf, layout.list.y);
        assert!(!unhighlighted.contains('>'));
    }

    #[test]
    fn test_render_no_results_placeholder() {
        let mut state = fruit_state();
        state.focus();
        state.set_query("xyz");
        let (buf, layout) = render_to_buffer(&state);

        assert_eq!(layout.rows, 0);
        assert!(row_text(&buf, layout.list.y).contains(NO_RESULTS));
    }

    #[test]
    fn test_render_placeholder_text_when_empty() {
        let mut state = fruit_state().with_placeholder("Pick a fruit");
        state.focus();
        let (buf, _) = render_to_buffer(&state);
        assert!(row_text(&buf, 1).contains("Pick a fruit"));
    }

    // ------------------------------------------------------------
    // Hit-testing
    // ------------------------------------------------------------

    #[test]
    fn test_hit_field_and_options() {
        let mut state = fruit_state();
        state.focus();
        let (_, layout) = render_to_buffer(&state);

        assert!(layout.hit_field(2, 1));
        assert!(!layout.hit_field(2, 5));

        assert_eq!(layout.hit_option(5, layout.list.y), Some(0));
        assert_eq!(layout.hit_option(5, layout.list.y + 3), Some(3));
        assert_eq!(layout.hit_option(5, layout.list.y + 6), None);
    }

    #[test]
    fn test_placeholder_row_is_not_clickable() {
        let mut state = fruit_state();
        state.focus();
        state.set_query("xyz");
        let (_, layout) = render_to_buffer(&state);

        assert_eq!(layout.hit_option(5, layout.list.y), None);
    }

    // ------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------

    proptest! {
        #[test]
        fn prop_filter_is_ordered_lowercase_substring_subsequence(query in ".{0,10}") {
            let mut state = fruit_state();
            state.set_query(&query);

            let needle = query.to_lowercase();
            let expected: Vec<&str> = state
                .options()
                .iter()
                .filter(|option| option.to_lowercase().contains(&needle))
                .map(String::as_str)
                .collect();

            prop_assert_eq!(state.visible_options(), expected);
            prop_assert_eq!(state.highlight(), None);
        }

        #[test]
        fn prop_highlight_stays_in_bounds(
            query in ".{0,4}",
            downs in proptest::collection::vec(any::<bool>(), 0..32),
        ) {
            let mut state = fruit_state();
            state.set_query(&query);

            for down in downs {
                if down {
                    state.highlight_next();
                } else {
                    state.highlight_prev();
                }
                match state.highlight() {
                    Some(idx) => prop_assert!(idx < state.visible_len()),
                    None => prop_assert_eq!(state.visible_len(), 0),
                }
            }
        }
    }
}
