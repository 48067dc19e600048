//! Orchard - a filterable combo box demo for the terminal.
//!
//! Run `orchard`, press Tab (or click the field), type to filter the
//! fruit list, and pick an entry with Enter or the mouse. The selection
//! is printed on exit.
//!
//! Set `ORCHARD_DEBUG=1` to write trace logs to `./debug.txt`
//! (`ORCHARD_LOG` overrides the filter).

use anyhow::Result;
use orchard_tui::runner::{EventLoop, OrchardTerminal};

/// Guard that keeps the debug log writer alive and flushing.
struct DebugLogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Set up file logging to `./debug.txt`. A TUI owns the screen, so logs
/// never go to stdout.
fn setup_debug_file_logging() -> Result<DebugLogGuard> {
    use std::fs::File;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let debug_file_path = std::env::current_dir()?.join("debug.txt");
    let file = File::create(&debug_file_path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let filter = std::env::var("ORCHARD_LOG").unwrap_or_else(|_| "trace".to_string());
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(file_layer)
        .init();

    Ok(DebugLogGuard { _guard: guard })
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = if std::env::var_os("ORCHARD_DEBUG").is_some() {
        Some(setup_debug_file_logging()?)
    } else {
        None
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting orchard");

    let mut terminal = OrchardTerminal::new()?;
    let selected = EventLoop::new().run(&mut terminal).await?;
    drop(terminal);

    if let Some(value) = selected {
        println!("{value}");
    }
    Ok(())
}
