//! JSON output formatting for focuskit.

use serde::Serialize;
use serde_json::json;

use crate::error::FocusError;
use crate::features::focus::FocusSession;
use crate::features::stats::{Achievement, FocusStats};

/// Format session history as JSON.
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_history_json(sessions: &[FocusSession]) -> Result<String, FocusError> {
    let output = json!({
        "count": sessions.len(),
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format statistics and achievements as JSON.
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_stats_json(
    stats: &FocusStats,
    achievements: &[Achievement],
) -> Result<String, FocusError> {
    let output = json!({
        "stats": stats,
        "achievements": achievements
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FocusError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::Phase;
    use crate::features::stats::StatsPeriod;
    use chrono::NaiveDate;

    #[test]
    fn test_history_json_uses_wire_names() {
        let sessions = vec![FocusSession {
            id: 1_710_000_000_000,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            duration: 25,
            session_type: Phase::Focus,
            completed: true,
        }];

        let value: serde_json::Value =
            serde_json::from_str(&format_history_json(&sessions).unwrap()).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["type"], "pomodoro");
        assert_eq!(value["items"][0]["date"], "2024-03-09");
    }

    #[test]
    fn test_stats_json_shape() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let stats = FocusStats::compute(&[], today, StatsPeriod::Day);

        let value: serde_json::Value =
            serde_json::from_str(&format_stats_json(&stats, &[]).unwrap()).unwrap();

        assert_eq!(value["stats"]["period"], "day");
        assert_eq!(value["stats"]["today_minutes"], 0);
        assert!(value["achievements"].as_array().unwrap().is_empty());
    }
}
