//! Orchard theme - warm orchard-green visual identity.
//!
//! A single cohesive palette for the whole application. All colors are
//! constants; components never hardcode colors at use sites.

use ratatui::style::Color;

// ============================================================
// BRAND COLORS - Leaf-green accents
// ============================================================

/// Primary accent - leaf green
pub const ACCENT: Color = Color::Rgb(122, 196, 94); // #7AC45E

/// Bright accent for highlights
pub const ACCENT_BRIGHT: Color = Color::Rgb(168, 224, 132); // #A8E084

/// Warm amber - secondary accent
pub const AMBER: Color = Color::Rgb(222, 168, 62); // #DEA83E

// ============================================================
// BACKGROUND COLORS - Dark bark base
// ============================================================

/// Main background
pub const SURFACE_0: Color = Color::Rgb(23, 21, 17); // #171511

/// Raised surface - field and row background
pub const SURFACE_1: Color = Color::Rgb(37, 34, 27); // #25221B

/// Highlighted surface - the active row
pub const SURFACE_2: Color = Color::Rgb(56, 52, 40); // #383428

// ============================================================
// TEXT COLORS
// ============================================================

/// Primary text
pub const TEXT: Color = Color::Rgb(236, 230, 216); // #ECE6D8

/// Dimmed text - secondary information
pub const TEXT_DIM: Color = Color::Rgb(158, 150, 130); // #9E9682

/// Muted text - placeholders and chrome
pub const TEXT_MUTED: Color = Color::Rgb(106, 100, 84); // #6A6454

// ============================================================
// SEMANTIC COLORS
// ============================================================

/// Error - used for engine failures in logs and chrome
pub const ERROR: Color = Color::Rgb(224, 100, 92); // #E0645C

/// Warning
pub const WARNING: Color = Color::Rgb(230, 190, 90); // #E6BE5A

// ============================================================
// BORDERS
// ============================================================

/// Border of an unfocused container
pub const BORDER: Color = Color::Rgb(88, 82, 68); // #585244

/// Border of the focused container
pub const BORDER_FOCUS: Color = Color::Rgb(122, 196, 94); // #7AC45E
