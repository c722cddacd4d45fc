//! Vocab TUI
//!
//! Terminal user interface with three views:
//! - Create Set: name and save a new set
//! - Add Cards: pick a set, add word/definition cards, select it for study
//! - Study: flip through the selected set's cards
//!
//! ## Keys
//!
//! - Tab / Shift-Tab: Switch view
//! - F1: Help
//! - Esc: Quit
//!
//! See the help overlay for per-view keys.

mod app;
mod ui;

use std::io::stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;
use vocab_core::Store;

use app::App;

/// How long to wait for a key before redrawing (status timeouts)
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run the TUI application
///
/// With `study_set`, the set is selected up front and the Study view opens.
pub fn run(store: &mut Store, study_set: Option<String>) -> Result<()> {
    let mut app = App::new(store)?;

    if let Some(name) = study_set {
        app.start_study(store, &name)
            .with_context(|| format!("Cannot study '{}'", name))?;
    }

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    info!("TUI started");
    let result = run_app(&mut terminal, &mut app, store);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, store: &mut Store) -> Result<()> {
    loop {
        app.check_status_timeout();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(store, key.code, key.modifiers);
                }
            }
        }

        if app.should_quit {
            info!("TUI exiting");
            break;
        }
    }

    Ok(())
}
