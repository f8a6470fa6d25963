//! Focus timer and session ledger.
//!
//! - Pomodoro countdown alternating focus and break intervals
//! - One immutable ledger record per stop or completion
//! - Pluggable ledger backends and an injected tick source

pub mod clock;
pub mod driver;
pub mod ledger;
pub mod session;
pub mod storage;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::{
    DriverOutcome, IntervalTicks, ScriptedTicks, StopReason, TickSource, TimerDriver, TimerEvent,
};
pub use ledger::{FallbackLedger, JsonFileLedger, MemoryLedger, SessionLedger};
pub use session::{
    FocusSession, Phase, PhaseDurations, BREAK_MINUTES, FOCUS_MINUTES, MAX_PHASE_MINUTES,
};
pub use storage::SqliteLedger;
pub use timer::{
    format_duration, format_duration_mmss, render_progress_bar, FocusTimer, TimerSnapshot,
};
