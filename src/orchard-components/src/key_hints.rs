//! Key hints bar component.
//!
//! Renders keyboard shortcut hints in a compact single row:
//! `[↑↓] Navigate  [Enter] Select  [Esc] Dismiss`

use orchard_core::style::{ACCENT, TEXT_DIM};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

/// A single key hint (key + description).
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination
    pub key: String,
    /// What the key does
    pub description: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

impl<'a, 'b> From<(&'a str, &'b str)> for KeyHint {
    fn from((key, description): (&'a str, &'b str)) -> Self {
        Self::new(key, description)
    }
}

/// A horizontal bar of key hints.
#[derive(Debug, Clone, Default)]
pub struct KeyHintsBar {
    hints: Vec<KeyHint>,
}

impl KeyHintsBar {
    /// Create an empty key hints bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from (key, description) tuples.
    pub fn from_tuples(hints: &[(&str, &str)]) -> Self {
        Self {
            hints: hints.iter().map(|&hint| hint.into()).collect(),
        }
    }

    /// Add a hint.
    pub fn hint(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.hints.push(KeyHint::new(key, description));
        self
    }

    /// Total display width of the bar.
    pub fn width(&self) -> usize {
        let hints: usize = self
            .hints
            .iter()
            // "[key] description"
            .map(|hint| hint.key.width() + hint.description.width() + 3)
            .sum();
        let separators = self.hints.len().saturating_sub(1) * 2;
        hints + separators
    }
}

impl Widget for KeyHintsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let key_style = Style::default().fg(ACCENT);
        let description_style = Style::default().fg(TEXT_DIM);

        let mut x = area.x;
        let mut put = |text: &str, style: Style, x: &mut u16| {
            for ch in text.chars() {
                if *x >= area.right() {
                    break;
                }
                if let Some(cell) = buf.cell_mut((*x, area.y)) {
                    cell.set_char(ch).set_style(style);
                }
                *x += 1;
            }
        };

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                put("  ", description_style, &mut x);
            }
            put(&format!("[{}]", hint.key), key_style, &mut x);
            put(" ", description_style, &mut x);
            put(&hint.description, description_style, &mut x);
        }
    }
}
