//! Raw input handling.

pub mod mouse;

pub use mouse::{MouseAction, MouseButton, MouseHandler};
