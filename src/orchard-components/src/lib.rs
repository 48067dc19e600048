//! # Orchard TUI Components
//!
//! Reusable components wrapping ratatui primitives with consistent
//! theming and behavior.
//!
//! Application code never uses raw ratatui widgets directly; it composes
//! these components, which all:
//!
//! 1. draw with the `orchard-core` theme constants,
//! 2. route keys through the [`Component`](component::Component) trait, and
//! 3. report their shortcuts for the key hints bar.
//!
//! ## Components
//!
//! - [`ComboBox`](combo_box::ComboBox) - filterable combo box
//!   (field + suggestion list)
//! - [`InputState`](input::InputState) - single-line text input state
//! - [`KeyHintsBar`](key_hints::KeyHintsBar) - shortcut hints row
//! - [`BorderStyle`](borders::BorderStyle) - shared border chrome

pub mod borders;
pub mod combo_box;
pub mod component;
pub mod input;
pub mod key_hints;

/// Commonly used types for quick imports.
pub mod prelude {
    pub use crate::borders::{ASCII_BORDER, BorderStyle, ROUNDED_BORDER, SINGLE_BORDER};
    pub use crate::combo_box::{
        BLUR_CLOSE_DELAY, ComboBox, ComboBoxLayout, ComboBoxState, NO_RESULTS,
    };
    pub use crate::component::{Component, ComponentResult, FocusState};
    pub use crate::input::InputState;
    pub use crate::key_hints::{KeyHint, KeyHintsBar};
}

/// Orchard TUI Components version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
