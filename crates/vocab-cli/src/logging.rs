//! Logging setup
//!
//! Logging is off unless `VOCAB_LOG` is set to a level (e.g. `debug`).
//! The TUI owns the terminal, so in TUI mode logs go to a file
//! (`log_file` from config, or `{data_dir}/debug.log`); plain commands log
//! to stderr.

use std::fs::File;
use std::io;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;
use vocab_core::Config;

/// Environment variable holding the log level
const LOG_ENV: &str = "VOCAB_LOG";

/// Initialize logging if `VOCAB_LOG` is set
pub fn init(config: &Config, tui_mode: bool) {
    let Ok(log_level) = std::env::var(LOG_ENV) else {
        return;
    };

    let env_filter = filter_for(&log_level);

    if !tui_mode {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(io::stderr)
            .try_init();
        return;
    }

    let log_path = config.log_path();
    let log_file = match create_log_file(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();

    info!("TUI logging initialized to {:?}", log_path);
}

/// Create (truncate) the log file, making its directory first
fn create_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    File::create(path)
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::new(format!("vocab_core={0},vocab={0}", level))
}
