//! File-based logging setup
//!
//! The terminal is owned by ratatui while the app runs, so log output goes
//! to a file in the data directory instead of stderr. The level is
//! controlled through the standard `RUST_LOG` environment variable and
//! defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "feedback-tui.log";

/// Initialize the tracing subscriber with a file writer.
///
/// Fails silently: logging is optional, and a missing or read-only data
/// directory must not keep the app from starting. Safe to call more than
/// once; only the first call takes effect.
pub fn init(data_dir: &Path) {
    if fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let log_path = data_dir.join(LOG_FILE);
    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(f) => f,
        Err(_) => return,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
