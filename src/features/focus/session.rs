//! Focus session records.
//!
//! A [`FocusSession`] is the immutable ledger entry written whenever the
//! timer leaves the running state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Nominal focus interval in minutes.
pub const FOCUS_MINUTES: u32 = 25;

/// Nominal break interval in minutes.
pub const BREAK_MINUTES: u32 = 5;

/// Longest interval a configuration may ask for: one day.
pub const MAX_PHASE_MINUTES: u32 = 24 * 60;

/// Which interval the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Focused work
    #[serde(rename = "pomodoro", alias = "focus")]
    Focus,
    /// Rest between focus intervals
    #[serde(rename = "break")]
    Break,
}

impl Phase {
    /// The phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    /// Value stored in the ledger.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Focus => "pomodoro",
            Self::Break => "break",
        }
    }

    /// Parse a stored phase value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pomodoro" | "focus" => Some(Self::Focus),
            "break" => Some(Self::Break),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Break => "Break",
        }
    }

    /// Check if this is the break phase.
    #[must_use]
    pub const fn is_break(self) -> bool {
        matches!(self, Self::Break)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Nominal length of each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDurations {
    /// Focus interval in minutes
    pub focus_minutes: u32,
    /// Break interval in minutes
    pub break_minutes: u32,
}

impl PhaseDurations {
    /// Nominal minutes for a phase.
    #[must_use]
    pub const fn minutes(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focus => self.focus_minutes,
            Phase::Break => self.break_minutes,
        }
    }

    /// Nominal seconds for a phase, saturating at `u32::MAX`.
    #[must_use]
    pub const fn seconds(&self, phase: Phase) -> u32 {
        self.minutes(phase).saturating_mul(60)
    }
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            focus_minutes: FOCUS_MINUTES,
            break_minutes: BREAK_MINUTES,
        }
    }
}

/// One logged focus or break interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSession {
    /// Time-of-creation based identifier (Unix milliseconds)
    pub id: i64,
    /// Day the session ended or was interrupted
    pub date: NaiveDate,
    /// Nominal phase length in minutes
    pub duration: u32,
    /// Phase that was running
    #[serde(rename = "type")]
    pub session_type: Phase,
    /// Whether the countdown ran out rather than being stopped
    pub completed: bool,
}

impl FocusSession {
    /// Check if this is a focus (not break) record.
    #[must_use]
    pub const fn is_focus(&self) -> bool {
        matches!(self.session_type, Phase::Focus)
    }

    /// One-line description used by history listings.
    #[must_use]
    pub fn summary(&self) -> String {
        let outcome = if self.completed { "Completed" } else { "Incomplete" };
        format!(
            "{}min {} Session ({})",
            self.duration,
            self.session_type.display_name(),
            outcome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(phase: Phase, completed: bool) -> FocusSession {
        FocusSession {
            id: 1_700_000_000_000,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            duration: PhaseDurations::default().minutes(phase),
            session_type: phase,
            completed,
        }
    }

    #[test]
    fn test_phase_alternates() {
        assert_eq!(Phase::Focus.next(), Phase::Break);
        assert_eq!(Phase::Break.next(), Phase::Focus);
    }

    #[test]
    fn test_default_durations() {
        let durations = PhaseDurations::default();
        assert_eq!(durations.minutes(Phase::Focus), 25);
        assert_eq!(durations.minutes(Phase::Break), 5);
        assert_eq!(durations.seconds(Phase::Focus), 1500);
        assert_eq!(durations.seconds(Phase::Break), 300);
    }

    #[test]
    fn test_huge_durations_saturate() {
        let durations = PhaseDurations {
            focus_minutes: 80_000_000,
            break_minutes: 5,
        };
        assert_eq!(durations.seconds(Phase::Focus), u32::MAX);
        assert_eq!(durations.seconds(Phase::Break), 300);
    }

    #[test]
    fn test_phase_parse() {
        assert_eq!(Phase::parse("pomodoro"), Some(Phase::Focus));
        assert_eq!(Phase::parse("Focus"), Some(Phase::Focus));
        assert_eq!(Phase::parse("break"), Some(Phase::Break));
        assert_eq!(Phase::parse("nap"), None);
    }

    #[test]
    fn test_session_wire_format() {
        let json = serde_json::to_value(sample(Phase::Focus, false)).unwrap();
        assert_eq!(json["type"], "pomodoro");
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["duration"], 25);
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn test_session_reads_legacy_records() {
        let raw = r#"{"id":1709942400000,"date":"2024-03-09","duration":5,"type":"break","completed":true}"#;
        let session: FocusSession = serde_json::from_str(raw).unwrap();
        assert_eq!(session.session_type, Phase::Break);
        assert!(session.completed);

        let raw = r#"{"id":2,"date":"2024-03-09","duration":25,"type":"focus","completed":false}"#;
        let session: FocusSession = serde_json::from_str(raw).unwrap();
        assert!(session.is_focus());
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            sample(Phase::Focus, true).summary(),
            "25min Focus Session (Completed)"
        );
        assert_eq!(
            sample(Phase::Break, false).summary(),
            "5min Break Session (Incomplete)"
        );
    }
}
