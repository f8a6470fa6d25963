//! Focus statistics and achievements.
//!
//! Everything here is computed on demand from the session ledger:
//! - Today and rolling-week focus minutes
//! - Completion rate and daily streak
//! - Per-day breakdowns and terminal charts
//! - Goal and milestone messages

pub mod achievements;
pub mod report;
pub mod visualization;

pub use achievements::{evaluate, Achievement, AchievementKind, Goals};
pub use report::{DailyFocus, FocusStats, StatsPeriod};
pub use visualization::{
    render_bar_chart, render_daily_chart, render_goal_bar, render_sparkline, render_summary_box,
};
