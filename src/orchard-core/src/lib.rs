//! # Orchard Core
//!
//! The engine layer of the Orchard TUI:
//!
//! - **Frame engine**: a tokio task multiplexing terminal input with a
//!   tick interval, feeding the application one [`EngineEvent`] at a time.
//! - **Events**: app-level [`Action`]s with [`KeyMapper`] bindings for the
//!   keys the focused widget does not consume.
//! - **Style**: the Orchard visual identity, a single constant-based theme.

pub mod events;
pub mod frame_engine;
pub mod style;

pub use events::{Action, DefaultKeyMapper, KeyMapper};
pub use frame_engine::{
    DEFAULT_CHANNEL_BUFFER, DEFAULT_TICK_RATE_MS, EngineEvent, FrameEngine, create_event_channel,
};

/// Orchard Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
