//! # Orchard TUI
//!
//! The Orchard application: a filterable combo box mounted on a titled
//! host page, driven by the `orchard-core` frame engine.
//!
//! - [`app`] - application state and event dispatch
//! - [`views`] - the host page
//! - [`input`] - mouse translation
//! - [`runner`] - terminal lifecycle and the event loop

pub mod app;
pub mod input;
pub mod runner;
pub mod views;
