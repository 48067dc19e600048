//! Border styles and utilities.
//!
//! Consistent border rendering for every bordered container.

use orchard_core::style::{BORDER, BORDER_FOCUS};
use ratatui::style::Style;
use ratatui::symbols::border::Set as BorderSet;
use ratatui::widgets::{Block, Borders};

/// Rounded border character set used throughout Orchard.
pub const ROUNDED_BORDER: BorderSet = BorderSet {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal_top: "─",
    horizontal_bottom: "─",
    vertical_left: "│",
    vertical_right: "│",
};

/// Single-line border character set.
pub const SINGLE_BORDER: BorderSet = BorderSet {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    horizontal_top: "─",
    horizontal_bottom: "─",
    vertical_left: "│",
    vertical_right: "│",
};

/// ASCII-only border for maximum terminal compatibility.
pub const ASCII_BORDER: BorderSet = BorderSet {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal_top: "-",
    horizontal_bottom: "-",
    vertical_left: "|",
    vertical_right: "|",
};

/// Border style variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No border
    None,
    /// Rounded corners (default Orchard style)
    #[default]
    Rounded,
    /// Single line border
    Single,
    /// ASCII-only
    Ascii,
}

impl BorderStyle {
    /// Get the border character set for this style.
    pub fn border_set(&self) -> Option<BorderSet<'_>> {
        match self {
            BorderStyle::None => None,
            BorderStyle::Rounded => Some(ROUNDED_BORDER),
            BorderStyle::Single => Some(SINGLE_BORDER),
            BorderStyle::Ascii => Some(ASCII_BORDER),
        }
    }

    /// Create a ratatui Block with this border style.
    pub fn block(&self, focused: bool) -> Block<'_> {
        let border_color = if focused { BORDER_FOCUS } else { BORDER };

        let mut block = Block::default().border_style(Style::default().fg(border_color));

        if let Some(set) = self.border_set() {
            block = block.borders(Borders::ALL).border_set(set);
        }

        block
    }
}
