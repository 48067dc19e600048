//! The application event loop.
//!
//! Spawns the frame engine and consumes its events one at a time:
//! keyboard goes to the focused combo box first, mouse clicks are
//! resolved against the rendered layout, and ticks apply the combo box's
//! deferred blur close. State transitions stay synchronous on this task.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use anyhow::Result;
use orchard_core::frame_engine::{EngineEvent, FrameEngine, create_event_channel};

use crate::app::AppState;
use crate::input::{MouseAction, MouseHandler};
use crate::runner::terminal::OrchardTerminal;
use crate::views::host;

/// Runs the application until quit.
pub struct EventLoop {
    state: AppState,
    mouse: MouseHandler,
    running: Arc<AtomicBool>,
}

impl EventLoop {
    /// Create the event loop with fresh application state.
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            mouse: MouseHandler::new(),
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Run to completion. Returns the last committed option, if any.
    pub async fn run(mut self, terminal: &mut OrchardTerminal) -> Result<Option<String>> {
        let (event_tx, mut event_rx) = create_event_channel();
        let engine = FrameEngine::new(event_tx, self.running.clone());
        let engine_task = tokio::spawn(engine.run());

        self.draw(terminal)?;

        while let Some(event) = event_rx.recv().await {
            match event {
                EngineEvent::Tick(_) => {
                    if self.state.tick(Instant::now()) {
                        self.draw(terminal)?;
                    }
                }
                EngineEvent::Key(key) => {
                    if self.state.handle_key(key, Instant::now()) {
                        self.draw(terminal)?;
                    }
                    if self.state.should_quit() {
                        break;
                    }
                }
                EngineEvent::Mouse(mouse) => {
                    if let Some(MouseAction::Click { x, y, .. }) = self.mouse.handle(mouse) {
                        if self.state.handle_click(x, y, Instant::now()) {
                            self.draw(terminal)?;
                        }
                    }
                }
                EngineEvent::Paste(text) => {
                    if self.state.handle_paste(&text) {
                        self.draw(terminal)?;
                    }
                }
                EngineEvent::Resize(_, _) => {
                    self.draw(terminal)?;
                }
                EngineEvent::Quit => break,
                EngineEvent::Error(message) => {
                    tracing::error!(%message, "engine error");
                }
            }
        }

        self.running.store(false, Ordering::Relaxed);
        engine_task.abort();
        tracing::info!("event loop finished");

        Ok(self.state.last_committed)
    }

    /// Draw the host page and record its layout for hit-testing.
    fn draw(&mut self, terminal: &mut OrchardTerminal) -> Result<()> {
        let mut layout = host::HostLayout::default();
        let state = &self.state;
        terminal.draw(|frame| layout = host::render(frame, state))?;
        self.state.layout = layout;
        Ok(())
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}
