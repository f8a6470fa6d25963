//! Goal and milestone messages derived from focus statistics.

use serde::{Deserialize, Serialize};

use super::report::FocusStats;

/// Kind of achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    /// Resets every day
    Daily,
    /// Rolling seven-day window
    Weekly,
    /// Lifetime totals
    Milestone,
}

/// A goal reached, or progress toward one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Kind of goal
    pub kind: AchievementKind,
    /// Message shown to the user
    pub message: String,
    /// Whether the goal has been met
    pub achieved: bool,
    /// Current value, for goals still in progress
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    /// Target value, for goals still in progress
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
}

/// Thresholds for achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goals {
    /// Focus minutes per day
    pub daily_minutes: u32,
    /// Focus minutes per rolling week
    pub weekly_minutes: u32,
    /// Lifetime focus sessions for the milestone
    pub milestone_sessions: u32,
    /// Completion rate (percent) for the consistency badge
    pub consistency_rate: u32,
    /// Length of one pomodoro, used to express minutes as pomodoros
    pub pomodoro_minutes: u32,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            daily_minutes: 50,
            weekly_minutes: 1000,
            milestone_sessions: 100,
            consistency_rate: 90,
            pomodoro_minutes: 25,
        }
    }
}

impl Achievement {
    fn reached(kind: AchievementKind, message: String) -> Self {
        Self {
            kind,
            message,
            achieved: true,
            progress: None,
            target: None,
        }
    }

    fn pending(kind: AchievementKind, message: String, progress: u32, target: u32) -> Self {
        Self {
            kind,
            message,
            achieved: false,
            progress: Some(progress),
            target: Some(target),
        }
    }
}

/// Build the achievement list for `stats`.
///
/// Daily and weekly entries are always present; milestones only appear once
/// reached.
#[must_use]
pub fn evaluate(stats: &FocusStats, goals: &Goals) -> Vec<Achievement> {
    let mut achievements = Vec::new();
    let pomodoro = goals.pomodoro_minutes.max(1);

    if stats.today_minutes >= goals.daily_minutes {
        achievements.push(Achievement::reached(
            AchievementKind::Daily,
            format!(
                "You've logged {} focused minutes today. Great job!",
                stats.today_minutes
            ),
        ));
    } else {
        achievements.push(Achievement::pending(
            AchievementKind::Daily,
            format!(
                "You're {} minutes away from your daily goal!",
                goals.daily_minutes - stats.today_minutes
            ),
            stats.today_minutes,
            goals.daily_minutes,
        ));
    }

    if stats.week_minutes >= goals.weekly_minutes {
        let pomodoros = stats.week_minutes.saturating_add(pomodoro / 2) / pomodoro;
        achievements.push(Achievement::reached(
            AchievementKind::Weekly,
            format!("Amazing! You've completed {pomodoros} pomodoros this week!"),
        ));
    } else {
        let remaining = (goals.weekly_minutes - stats.week_minutes).div_ceil(pomodoro);
        achievements.push(Achievement::pending(
            AchievementKind::Weekly,
            format!("You're {remaining} pomodoros away from your weekly goal!"),
            stats.week_minutes,
            goals.weekly_minutes,
        ));
    }

    if stats.total_sessions >= goals.milestone_sessions {
        achievements.push(Achievement::reached(
            AchievementKind::Milestone,
            format!(
                "Milestone reached! You've completed {} focus sessions!",
                stats.total_sessions
            ),
        ));
    }

    if stats.total_sessions > 0 && stats.completion_rate >= goals.consistency_rate {
        achievements.push(Achievement::reached(
            AchievementKind::Milestone,
            format!(
                "Excellent consistency! {}% completion rate!",
                stats.completion_rate
            ),
        ));
    }

    achievements
}
