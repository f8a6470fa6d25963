//! The focus timer state machine.
//!
//! Counts down a focus or break interval one second per [`FocusTimer::tick`]
//! and appends a [`FocusSession`] to the ledger every time the timer leaves
//! the running state.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::ledger::{FallbackLedger, SessionLedger};
use super::session::{FocusSession, Phase, PhaseDurations};

/// Point-in-time view of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// Interval being counted down
    pub phase: Phase,
    /// Seconds left in the interval
    pub remaining_seconds: u32,
    /// Whether ticks are being counted
    pub running: bool,
}

/// Pomodoro countdown that logs every interval it leaves.
pub struct FocusTimer<L, C = SystemClock> {
    durations: PhaseDurations,
    phase: Phase,
    remaining_seconds: u32,
    running: bool,
    ledger: FallbackLedger<L>,
    clock: C,
    last_id: i64,
}

impl<L: SessionLedger> FocusTimer<L, SystemClock> {
    /// Create an idle timer on the wall clock with default durations.
    pub fn new(ledger: L) -> Self {
        Self::with_clock(ledger, SystemClock, PhaseDurations::default())
    }
}

impl<L: SessionLedger, C: Clock> FocusTimer<L, C> {
    /// Create an idle timer at the start of a focus interval.
    pub fn with_clock(ledger: L, clock: C, durations: PhaseDurations) -> Self {
        Self {
            durations,
            phase: Phase::Focus,
            remaining_seconds: durations.seconds(Phase::Focus),
            running: false,
            ledger: FallbackLedger::new(ledger),
            clock,
            last_id: 0,
        }
    }

    /// Start or resume the countdown. No-op if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        debug!(phase = %self.phase, remaining = self.remaining_seconds, "timer started");
    }

    /// Stop the countdown early.
    ///
    /// Returns the incomplete session that was logged, or `None` if the
    /// timer was not running. The remaining time is kept so that a later
    /// [`FocusTimer::start`] resumes where it left off.
    pub fn stop(&mut self) -> Option<FocusSession> {
        if !self.running {
            return None;
        }
        self.running = false;
        debug!(phase = %self.phase, remaining = self.remaining_seconds, "timer stopped");
        Some(self.log_session(false))
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the completed session when this tick exhausts the interval.
    /// The timer then stops, flips phase, and reloads the new phase's length.
    pub fn tick(&mut self) -> Option<FocusSession> {
        if !self.running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return None;
        }

        self.running = false;
        let session = self.log_session(true);
        self.phase = self.phase.next();
        self.remaining_seconds = self.durations.seconds(self.phase);
        debug!(next = %self.phase, "interval completed");
        Some(session)
    }

    /// Return to an idle focus interval without logging anything.
    pub fn reset(&mut self) {
        self.running = false;
        self.phase = Phase::Focus;
        self.remaining_seconds = self.durations.seconds(Phase::Focus);
        debug!("timer reset");
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds left in the current interval.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Get remaining time as Duration.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::seconds(i64::from(self.remaining_seconds))
    }

    /// Check if the timer is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Configured interval lengths.
    #[must_use]
    pub const fn durations(&self) -> PhaseDurations {
        self.durations
    }

    /// Get progress through the current interval (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = self.durations.seconds(self.phase);
        if total == 0 {
            return 1.0;
        }
        1.0 - f64::from(self.remaining_seconds) / f64::from(total)
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_duration_mmss(self.remaining())
    }

    /// Copy of the observable state.
    #[must_use]
    pub const fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            phase: self.phase,
            remaining_seconds: self.remaining_seconds,
            running: self.running,
        }
    }

    /// The ledger the timer writes to.
    #[must_use]
    pub const fn ledger(&self) -> &FallbackLedger<L> {
        &self.ledger
    }

    fn log_session(&mut self, completed: bool) -> FocusSession {
        let id = self.next_id();
        let session = self.ledger.record(FocusSession {
            id,
            date: self.clock.today(),
            duration: self.durations.minutes(self.phase),
            session_type: self.phase,
            completed,
        });
        // The ledger may have moved the id past one it already held
        self.last_id = self.last_id.max(session.id);
        session
    }

    // Millisecond timestamps, bumped when two records share a millisecond.
    fn next_id(&mut self) -> i64 {
        let id = self
            .clock
            .now()
            .timestamp_millis()
            .max(self.last_id.saturating_add(1));
        self.last_id = id;
        id
    }
}

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let plural = |n: i64| if n == 1 { "" } else { "s" };

    match (hours, minutes) {
        (0, m) => format!("{m} minute{}", plural(m)),
        (h, 0) => format!("{h} hour{}", plural(h)),
        (h, m) => format!("{h} hour{}, {m} minute{}", plural(h), plural(m)),
    }
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
