//! Focus statistics computed from the session ledger.

use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::FocusError;
use crate::features::focus::FocusSession;

/// Window for the per-day breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsPeriod {
    /// Today only
    Day,
    /// Last 7 days
    #[default]
    Week,
    /// Last 30 days
    Month,
}

impl StatsPeriod {
    /// Number of daily buckets in the period.
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Day => "Today",
            Self::Week => "Last 7 Days",
            Self::Month => "Last 30 Days",
        }
    }
}

impl FromStr for StatsPeriod {
    type Err = FocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "today" | "d" => Ok(Self::Day),
            "week" | "w" | "7d" => Ok(Self::Week),
            "month" | "m" | "30d" => Ok(Self::Month),
            other => Err(FocusError::InvalidArgument(format!(
                "unknown period '{other}' (expected day, week, or month)"
            ))),
        }
    }
}

/// Focus activity on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFocus {
    /// Calendar day
    pub date: NaiveDate,
    /// Focus minutes logged
    pub minutes: u32,
    /// Focus sessions logged
    pub sessions: u32,
    /// Focus sessions that ran to completion
    pub completed: u32,
}

/// Aggregate view over focus records.
///
/// Break records are ignored everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusStats {
    /// Period used for `daily`
    pub period: StatsPeriod,
    /// Minutes logged today
    pub today_minutes: u32,
    /// Minutes logged over the last week
    pub week_minutes: u32,
    /// Focus sessions ever logged
    pub total_sessions: u32,
    /// Focus sessions that ran to completion
    pub completed_sessions: u32,
    /// Completed share of all focus sessions, as a rounded percentage
    pub completion_rate: u32,
    /// Consecutive days with a completed focus session
    pub streak_days: u32,
    /// One bucket per day of the period, oldest first
    pub daily: Vec<DailyFocus>,
}

impl FocusStats {
    /// Compute statistics as of `today`.
    #[must_use]
    pub fn compute(sessions: &[FocusSession], today: NaiveDate, period: StatsPeriod) -> Self {
        let focus: Vec<&FocusSession> = sessions.iter().filter(|s| s.is_focus()).collect();

        let week_start = today - Duration::days(7);
        let today_minutes = total_minutes(focus.iter().copied().filter(|s| s.date == today));
        let week_minutes = total_minutes(focus.iter().copied().filter(|s| s.date >= week_start));

        let total_sessions = count(focus.len());
        let completed_sessions = count(focus.iter().filter(|s| s.completed).count());

        Self {
            period,
            today_minutes,
            week_minutes,
            total_sessions,
            completed_sessions,
            completion_rate: completion_rate(completed_sessions, total_sessions),
            streak_days: streak_days(&focus, today),
            daily: daily_buckets(&focus, today, period),
        }
    }

    /// Total minutes across the daily buckets.
    #[must_use]
    pub fn period_minutes(&self) -> u32 {
        self.daily
            .iter()
            .fold(0, |total: u32, d| total.saturating_add(d.minutes))
    }
}

// Saturates on hand-edited ledgers
fn total_minutes<'a>(sessions: impl Iterator<Item = &'a FocusSession>) -> u32 {
    sessions.fold(0, |total, s| total.saturating_add(s.duration))
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Rounded percentage, half up. Zero when there is nothing to rate.
fn completion_rate(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let rate = (u64::from(completed) * 100 + u64::from(total) / 2) / u64::from(total);
    u32::try_from(rate).unwrap_or(100)
}

fn daily_buckets(focus: &[&FocusSession], today: NaiveDate, period: StatsPeriod) -> Vec<DailyFocus> {
    let mut by_date: HashMap<NaiveDate, (u32, u32, u32)> = HashMap::new();
    for session in focus {
        let entry = by_date.entry(session.date).or_insert((0, 0, 0));
        entry.0 = entry.0.saturating_add(session.duration);
        entry.1 = entry.1.saturating_add(1);
        if session.completed {
            entry.2 = entry.2.saturating_add(1);
        }
    }

    (0..period.days())
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            let (minutes, sessions, completed) = by_date.get(&date).copied().unwrap_or_default();
            DailyFocus {
                date,
                minutes,
                sessions,
                completed,
            }
        })
        .collect()
}

/// Count consecutive days with a completed session, from today backwards.
///
/// A day without sessions today does not break the streak until tomorrow, so
/// counting starts from yesterday in that case.
fn streak_days(focus: &[&FocusSession], today: NaiveDate) -> u32 {
    let dates: BTreeSet<NaiveDate> = focus
        .iter()
        .filter(|s| s.completed)
        .map(|s| s.date)
        .collect();

    let mut check_date = today;
    if !dates.contains(&check_date) {
        check_date -= Duration::days(1);
    }

    let mut streak = 0;
    while dates.contains(&check_date) {
        streak += 1;
        check_date -= Duration::days(1);
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::Phase;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn focus(id: i64, date: NaiveDate, completed: bool) -> FocusSession {
        FocusSession {
            id,
            date,
            duration: 25,
            session_type: Phase::Focus,
            completed,
        }
    }

    fn pause(id: i64, date: NaiveDate) -> FocusSession {
        FocusSession {
            id,
            date,
            duration: 5,
            session_type: Phase::Break,
            completed: true,
        }
    }

    #[test]
    fn test_empty_ledger() {
        let stats = FocusStats::compute(&[], day(20), StatsPeriod::Week);

        assert_eq!(stats.today_minutes, 0);
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.streak_days, 0);
        assert_eq!(stats.daily.len(), 7);
    }

    #[test]
    fn test_breaks_are_ignored() {
        let sessions = vec![focus(1, day(20), true), pause(2, day(20)), pause(3, day(20))];
        let stats = FocusStats::compute(&sessions, day(20), StatsPeriod::Day);

        assert_eq!(stats.today_minutes, 25);
        assert_eq!(stats.total_sessions, 1);
        assert_eq!(stats.daily[0].sessions, 1);
    }

    #[test]
    fn test_today_and_week_minutes() {
        let sessions = vec![
            focus(1, day(20), true),
            focus(2, day(20), false),
            focus(3, day(13), true), // exactly seven days back still counts
            focus(4, day(12), true),
        ];
        let stats = FocusStats::compute(&sessions, day(20), StatsPeriod::Week);

        assert_eq!(stats.today_minutes, 50);
        assert_eq!(stats.week_minutes, 75);
        assert_eq!(stats.total_sessions, 4);
        assert_eq!(stats.completed_sessions, 3);
        assert_eq!(stats.completion_rate, 75);
    }

    #[test]
    fn test_huge_durations_saturate() {
        let mut big = focus(1, day(9), true);
        big.duration = u32::MAX;
        let sessions = vec![big.clone(), FocusSession { id: 2, ..big }];

        let stats = FocusStats::compute(&sessions, day(9), StatsPeriod::Week);
        assert_eq!(stats.today_minutes, u32::MAX);
        assert_eq!(stats.week_minutes, u32::MAX);
        assert_eq!(stats.period_minutes(), u32::MAX);
    }

    #[test]
    fn test_completion_rate_rounds_half_up() {
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(1, 8), 13);
        assert_eq!(completion_rate(0, 5), 0);
        assert_eq!(completion_rate(5, 5), 100);
    }

    #[test]
    fn test_daily_buckets_oldest_first() {
        let sessions = vec![
            focus(1, day(18), true),
            focus(2, day(20), false),
            focus(3, day(20), true),
        ];
        let stats = FocusStats::compute(&sessions, day(20), StatsPeriod::Week);

        assert_eq!(stats.daily.first().unwrap().date, day(14));
        assert_eq!(stats.daily.last().unwrap().date, day(20));

        let last = stats.daily.last().unwrap();
        assert_eq!((last.minutes, last.sessions, last.completed), (50, 2, 1));
        assert_eq!(stats.daily[4].minutes, 25);
        assert_eq!(stats.period_minutes(), 75);
    }

    #[test]
    fn test_month_period() {
        let stats = FocusStats::compute(&[], day(31), StatsPeriod::Month);
        assert_eq!(stats.daily.len(), 30);
        assert_eq!(stats.daily[0].date, day(2));
    }

    #[test]
    fn test_streak_counts_back_from_today() {
        let sessions = vec![
            focus(1, day(20), true),
            focus(2, day(19), true),
            focus(3, day(18), true),
            focus(4, day(16), true),
        ];
        let stats = FocusStats::compute(&sessions, day(20), StatsPeriod::Week);
        assert_eq!(stats.streak_days, 3);
    }

    #[test]
    fn test_streak_starts_yesterday_when_today_is_empty() {
        let sessions = vec![focus(1, day(19), true), focus(2, day(18), true)];
        let stats = FocusStats::compute(&sessions, day(20), StatsPeriod::Week);
        assert_eq!(stats.streak_days, 2);
    }

    #[test]
    fn test_streak_needs_completed_sessions() {
        let sessions = vec![focus(1, day(20), false), focus(2, day(19), false)];
        let stats = FocusStats::compute(&sessions, day(20), StatsPeriod::Week);
        assert_eq!(stats.streak_days, 0);
    }

    #[test]
    fn test_period_from_str() {
        assert_eq!("day".parse::<StatsPeriod>().unwrap(), StatsPeriod::Day);
        assert_eq!("Week".parse::<StatsPeriod>().unwrap(), StatsPeriod::Week);
        assert_eq!("30d".parse::<StatsPeriod>().unwrap(), StatsPeriod::Month);
        assert!("year".parse::<StatsPeriod>().is_err());
    }
}
