//! Application state for the TUI.

use crate::features::focus::{FocusSession, TimerEvent, TimerSnapshot};

const HELP: &str = "space:start/stop | r:reset | q:quit";

/// Application state.
pub struct App {
    /// Timer state as of the last event.
    pub snapshot: TimerSnapshot,
    /// Share of the current interval already elapsed.
    pub progress: f64,
    /// Sessions logged today, newest first.
    pub recent: Vec<FocusSession>,
    /// Status message to display.
    pub status: Option<String>,
    /// Set once a write to the ledger has failed.
    pub degraded: bool,
}

impl App {
    /// Create a new app instance.
    pub fn new(snapshot: TimerSnapshot, recent: Vec<FocusSession>) -> Self {
        Self {
            snapshot,
            progress: 0.0,
            recent,
            status: Some(HELP.to_string()),
            degraded: false,
        }
    }

    /// Update after the timer has handled `event`.
    pub fn apply(
        &mut self,
        snapshot: TimerSnapshot,
        progress: f64,
        event: TimerEvent,
        logged: Option<&FocusSession>,
    ) {
        let was_running = self.snapshot.running;
        self.snapshot = snapshot;
        self.progress = progress;

        if let Some(session) = logged {
            self.status = Some(format!("Logged: {}", session.summary()));
            self.recent.insert(0, session.clone());
            return;
        }

        match event {
            TimerEvent::Start | TimerEvent::Toggle if snapshot.running && !was_running => {
                self.status = Some(format!("{} started", snapshot.phase.display_name()));
            }
            TimerEvent::Reset => self.status = Some("Reset".to_string()),
            _ => {}
        }
    }

    /// Focus minutes among today's sessions.
    pub fn focus_minutes_today(&self) -> u32 {
        self.recent
            .iter()
            .filter(|s| s.is_focus())
            .fold(0, |total, s| total.saturating_add(s.duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::Phase;
    use chrono::NaiveDate;

    fn snapshot(running: bool) -> TimerSnapshot {
        TimerSnapshot {
            phase: Phase::Focus,
            remaining_seconds: 1500,
            running,
        }
    }

    fn session(phase: Phase, completed: bool) -> FocusSession {
        FocusSession {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            duration: if phase.is_break() { 5 } else { 25 },
            session_type: phase,
            completed,
        }
    }

    #[test]
    fn test_new_shows_help() {
        let app = App::new(snapshot(false), Vec::new());
        assert_eq!(app.status.as_deref(), Some(HELP));
    }

    #[test]
    fn test_toggle_on_reports_start() {
        let mut app = App::new(snapshot(false), Vec::new());
        app.apply(snapshot(true), 0.0, TimerEvent::Toggle, None);
        assert_eq!(app.status.as_deref(), Some("Focus started"));
    }

    #[test]
    fn test_logged_session_goes_first() {
        let mut app = App::new(snapshot(true), vec![session(Phase::Focus, true)]);
        app.apply(
            snapshot(false),
            0.4,
            TimerEvent::Toggle,
            Some(&session(Phase::Focus, false)),
        );

        assert_eq!(app.recent.len(), 2);
        assert!(!app.recent[0].completed);
        assert_eq!(
            app.status.as_deref(),
            Some("Logged: 25min Focus Session (Incomplete)")
        );
    }

    #[test]
    fn test_ticks_keep_status() {
        let mut app = App::new(snapshot(true), Vec::new());
        app.status = Some("Focus started".to_string());
        app.apply(snapshot(true), 0.1, TimerEvent::Tick, None);
        assert_eq!(app.status.as_deref(), Some("Focus started"));
        assert!((app.progress - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_focus_minutes_today_skips_breaks() {
        let app = App::new(
            snapshot(false),
            vec![
                session(Phase::Focus, true),
                session(Phase::Break, true),
                session(Phase::Focus, false),
            ],
        );
        assert_eq!(app.focus_minutes_today(), 50);
    }
}
