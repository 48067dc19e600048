//! The host page: title, mounted combo box, key hints.
//!
//! Rendering returns the frame's [`HostLayout`] so the event loop can
//! resolve mouse clicks against what is actually on screen.

use orchard_components::prelude::*;
use orchard_core::style::{ACCENT, SURFACE_0};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::app::AppState;

/// Page title.
pub const PAGE_TITLE: &str = "Combo Box";

/// Width of the mounted combo box.
const COMBO_WIDTH: u16 = 36;

/// Geometry of the last rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostLayout {
    /// Where the combo box landed
    pub combo: ComboBoxLayout,
}

/// Render the host page and report its layout.
pub fn render(frame: &mut Frame, state: &AppState) -> HostLayout {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(SURFACE_0)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // spacer
            Constraint::Min(4),    // combo box and its popup
            Constraint::Length(1), // key hints
        ])
        .split(area);

    let title = Paragraph::new(PAGE_TITLE)
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(title, chunks[0]);

    let combo_area = Rect {
        width: chunks[2].width.min(COMBO_WIDTH),
        ..chunks[2]
    };
    let combo = ComboBox::new(&state.combo);
    let combo_layout = combo.layout(combo_area);
    frame.render_widget(combo, combo_area);

    let hints = if state.combo.is_focused() {
        state.combo.key_hints()
    } else {
        vec![("Tab", "Focus"), ("q", "Quit")]
    };
    frame.render_widget(KeyHintsBar::from_tuples(&hints), chunks[3]);

    HostLayout {
        combo: combo_layout,
    }
}
