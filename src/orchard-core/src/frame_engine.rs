//! Frame/input engine.
//!
//! A tokio task that multiplexes crossterm terminal input with a fixed
//! tick interval and forwards both to the application as [`EngineEvent`]s
//! over an mpsc channel. The application consumes events one at a time,
//! so all state transitions stay synchronous on the event-loop task.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

/// Default tick rate in milliseconds (~30 ticks/second).
///
/// Ticks only drive deferred state (the combo box blur close) and redraws,
/// so a modest rate is plenty of resolution.
pub const DEFAULT_TICK_RATE_MS: u64 = 33;

/// Default event channel capacity.
pub const DEFAULT_CHANNEL_BUFFER: usize = 128;

/// Events emitted by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Periodic tick with the current frame counter
    Tick(u64),
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Bracketed paste
    Paste(String),
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// The input stream closed; the application should exit
    Quit,
    /// The input stream produced an error
    Error(String),
}

/// Create the engine event channel with the default capacity.
pub fn create_event_channel() -> (mpsc::Sender<EngineEvent>, mpsc::Receiver<EngineEvent>) {
    mpsc::channel(DEFAULT_CHANNEL_BUFFER)
}

/// The engine task: reads terminal input and emits ticks.
///
/// Runs until the shared `running` flag clears, the input stream ends, or
/// the receiving side of the channel is dropped.
///
/// # Example
///
/// ```rust,ignore
/// let (event_tx, mut event_rx) = create_event_channel();
/// let running = Arc::new(AtomicBool::new(true));
/// tokio::spawn(FrameEngine::new(event_tx, running.clone()).run());
///
/// while let Some(event) = event_rx.recv().await {
///     // dispatch
/// }
/// ```
pub struct FrameEngine {
    event_tx: mpsc::Sender<EngineEvent>,
    running: Arc<AtomicBool>,
    tick_rate: Duration,
    frame: u64,
}

impl FrameEngine {
    /// Create a new engine with the default tick rate.
    pub fn new(event_tx: mpsc::Sender<EngineEvent>, running: Arc<AtomicBool>) -> Self {
        Self {
            event_tx,
            running,
            tick_rate: Duration::from_millis(DEFAULT_TICK_RATE_MS),
            frame: 0,
        }
    }

    /// Override the tick rate.
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Run the engine until stopped.
    pub async fn run(mut self) {
        tracing::debug!(tick_rate_ms = self.tick_rate.as_millis() as u64, "engine started");

        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(self.tick_rate);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        while self.running.load(Ordering::Relaxed) {
            tokio::select! {
                _ = ticker.tick() => {
                    self.frame = self.frame.wrapping_add(1);
                    if self.event_tx.send(EngineEvent::Tick(self.frame)).await.is_err() {
                        break;
                    }
                }
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if let Some(engine_event) = translate(event) {
                            if self.event_tx.send(engine_event).await.is_err() {
                                break;
                            }
                        }
                    }
                    Some(Err(err)) => {
                        let _ = self.event_tx.send(EngineEvent::Error(err.to_string())).await;
                    }
                    None => {
                        let _ = self.event_tx.send(EngineEvent::Quit).await;
                        break;
                    }
                },
            }
        }

        tracing::debug!("engine stopped");
    }
}

/// Translate a raw crossterm event into an engine event.
///
/// Key releases are dropped (kitty-protocol terminals report them);
/// focus events are not consumed by this application.
fn translate(event: CrosstermEvent) -> Option<EngineEvent> {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
            Some(EngineEvent::Key(key))
        }
        CrosstermEvent::Mouse(mouse) => Some(EngineEvent::Mouse(mouse)),
        CrosstermEvent::Paste(text) => Some(EngineEvent::Paste(text)),
        CrosstermEvent::Resize(width, height) => Some(EngineEvent::Resize(width, height)),
        _ => None,
    }
}
