//! Terminal User Interface (TUI) for focuskit.
//!
//! Full-screen countdown driven by the same event loop as `focuskit run`.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;
pub use event::{map_key, TerminalEvents};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use crate::error::FocusError;
use crate::features::focus::{
    Clock, FocusSession, FocusTimer, PhaseDurations, SessionLedger, StopReason, SystemClock,
    TimerDriver,
};

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run<L: SessionLedger>(ledger: L, durations: PhaseDurations) -> Result<(), FocusError> {
    let today = SystemClock.today();
    let mut recent: Vec<FocusSession> = match ledger.read_all() {
        Ok(sessions) => sessions.into_iter().filter(|s| s.date == today).collect(),
        Err(e) => {
            warn!(error = %e, "could not read earlier sessions");
            Vec::new()
        }
    };
    recent.reverse();

    let mut terminal = setup_terminal(enable_raw_mode, enter_terminal, leave_terminal)?;

    let mut timer = FocusTimer::with_clock(ledger, SystemClock, durations);
    let mut app = App::new(timer.snapshot(), recent);
    let result = run_app(&mut terminal, &mut app, &mut timer);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Turn on raw mode and run `enter`. If `enter` fails, `restore` undoes the
/// partial setup before the error is returned.
fn setup_terminal<T>(
    enable: impl FnOnce() -> io::Result<()>,
    enter: impl FnOnce() -> Result<T, FocusError>,
    restore: impl FnOnce(),
) -> Result<T, FocusError> {
    enable().map_err(|e| FocusError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    enter().map_err(|e| {
        restore();
        e
    })
}

fn leave_terminal() {
    execute!(io::stdout(), LeaveAlternateScreen).ok();
    disable_raw_mode().ok();
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, FocusError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| FocusError::Terminal(format!("Failed to setup terminal: {e}")))?;

    Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| FocusError::Terminal(format!("Failed to create terminal: {e}")))
}

/// Run the main application loop.
fn run_app<B: Backend, L: SessionLedger, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    timer: &mut FocusTimer<L, C>,
) -> Result<(), FocusError> {
    terminal
        .draw(|frame| ui::render(frame, &*app))
        .map_err(|e| FocusError::Terminal(format!("Failed to draw: {e}")))?;

    let mut source = TerminalEvents::new();
    let outcome = TimerDriver::new().run(timer, &mut source, |timer, event, logged| {
        app.apply(timer.snapshot(), timer.progress(), event, logged);
        app.degraded = timer.ledger().is_degraded();
        terminal
            .draw(|frame| ui::render(frame, &*app))
            .map_err(|e| FocusError::Terminal(format!("Failed to draw: {e}")))?;
        Ok(())
    })?;

    if outcome.reason == StopReason::Quit && timer.is_running() {
        info!(phase = %timer.phase(), "quit with a running interval, not logged");
    }
    Ok(())
}
