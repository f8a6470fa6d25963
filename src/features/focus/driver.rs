//! Event loop that drives a [`FocusTimer`].
//!
//! All timer operations arrive through one [`TickSource`] and are applied
//! one at a time, so a tick can never interleave with a start, stop, or
//! reset.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::clock::Clock;
use super::ledger::SessionLedger;
use super::session::FocusSession;
use super::timer::FocusTimer;
use crate::error::FocusError;

/// Something the timer should react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed
    Tick,
    /// Start or resume the countdown
    Start,
    /// Stop the countdown early
    Stop,
    /// Start if idle, stop if running
    Toggle,
    /// Return to an idle focus interval
    Reset,
    /// Leave the loop
    Quit,
}

/// Supplies timer events in order.
pub trait TickSource {
    /// Block until the next event. `None` means the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying input fails.
    fn next_event(&mut self) -> Result<Option<TimerEvent>, FocusError>;
}

/// Real one-tick-per-period source.
///
/// Missed periods are not replayed: after a stall the next tick is scheduled
/// one period from now.
#[derive(Debug)]
pub struct IntervalTicks {
    period: Duration,
    next: Instant,
}

impl IntervalTicks {
    /// Tick every `period`, starting one period from now.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    /// One tick per second.
    #[must_use]
    pub fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Time left until the next tick is due.
    #[must_use]
    pub fn until_next(&self) -> Duration {
        self.next.saturating_duration_since(Instant::now())
    }

    /// Mark the pending tick as delivered and schedule the following one.
    pub fn advance(&mut self) {
        let now = Instant::now();
        self.next += self.period;
        if self.next <= now {
            trace!("tick interval overran, skipping missed ticks");
            self.next = now + self.period;
        }
    }
}

impl TickSource for IntervalTicks {
    fn next_event(&mut self) -> Result<Option<TimerEvent>, FocusError> {
        std::thread::sleep(self.until_next());
        self.advance();
        Ok(Some(TimerEvent::Tick))
    }
}

/// Pre-recorded events, for tests and replays.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTicks {
    events: VecDeque<TimerEvent>,
}

impl ScriptedTicks {
    /// Replay `events` in order.
    pub fn new(events: impl IntoIterator<Item = TimerEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Append `count` ticks.
    #[must_use]
    pub fn then_ticks(mut self, count: usize) -> Self {
        self.events
            .extend(std::iter::repeat(TimerEvent::Tick).take(count));
        self
    }

    /// Append one event.
    #[must_use]
    pub fn then(mut self, event: TimerEvent) -> Self {
        self.events.push_back(event);
        self
    }
}

impl TickSource for ScriptedTicks {
    fn next_event(&mut self) -> Result<Option<TimerEvent>, FocusError> {
        Ok(self.events.pop_front())
    }
}

/// Why [`TimerDriver::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A `Quit` event arrived
    Quit,
    /// The source ran dry
    Exhausted,
    /// The requested number of intervals completed
    PhaseLimit,
}

/// Summary of one driver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOutcome {
    /// Sessions logged during the run, in order
    pub logged: Vec<FocusSession>,
    /// Intervals that ran to zero
    pub completed_phases: usize,
    /// Why the loop ended
    pub reason: StopReason,
}

/// Applies events from a [`TickSource`] to a timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDriver {
    phase_limit: Option<usize>,
    auto_continue: bool,
}

impl TimerDriver {
    /// A driver that runs until the source ends or sends `Quit`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase_limit: None,
            auto_continue: false,
        }
    }

    /// Return after `limit` intervals complete.
    #[must_use]
    pub const fn phase_limit(mut self, limit: usize) -> Self {
        self.phase_limit = Some(limit);
        self
    }

    /// Start the next interval as soon as one completes.
    #[must_use]
    pub const fn auto_continue(mut self, enabled: bool) -> Self {
        self.auto_continue = enabled;
        self
    }

    /// Run the loop.
    ///
    /// `on_step` is called after every applied event with the logged session,
    /// if that event produced one.
    ///
    /// # Errors
    ///
    /// Returns the first error from the source or from `on_step`.
    pub fn run<L, C, S, F>(
        &self,
        timer: &mut FocusTimer<L, C>,
        source: &mut S,
        mut on_step: F,
    ) -> Result<DriverOutcome, FocusError>
    where
        L: SessionLedger,
        C: Clock,
        S: TickSource + ?Sized,
        F: FnMut(&FocusTimer<L, C>, TimerEvent, Option<&FocusSession>) -> Result<(), FocusError>,
    {
        let mut outcome = DriverOutcome {
            logged: Vec::new(),
            completed_phases: 0,
            reason: StopReason::Exhausted,
        };

        if self.phase_limit == Some(0) {
            outcome.reason = StopReason::PhaseLimit;
            return Ok(outcome);
        }

        while let Some(event) = source.next_event()? {
            let session = match event {
                TimerEvent::Quit => {
                    outcome.reason = StopReason::Quit;
                    break;
                }
                TimerEvent::Tick => timer.tick(),
                TimerEvent::Start => {
                    timer.start();
                    None
                }
                TimerEvent::Stop => timer.stop(),
                TimerEvent::Toggle => {
                    if timer.is_running() {
                        timer.stop()
                    } else {
                        timer.start();
                        None
                    }
                }
                TimerEvent::Reset => {
                    timer.reset();
                    None
                }
            };

            let completed = session.as_ref().is_some_and(|s| s.completed);
            if completed {
                outcome.completed_phases += 1;
            }

            on_step(&*timer, event, session.as_ref())?;
            if let Some(session) = session {
                outcome.logged.push(session);
            }

            if completed {
                if self
                    .phase_limit
                    .is_some_and(|limit| outcome.completed_phases >= limit)
                {
                    outcome.reason = StopReason::PhaseLimit;
                    break;
                }
                if self.auto_continue {
                    debug!(phase = %timer.phase(), "continuing with next interval");
                    timer.start();
                }
            }
        }

        Ok(outcome)
    }
}
