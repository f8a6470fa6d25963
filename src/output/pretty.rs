use chrono::Duration;
use colored::Colorize;

use crate::features::focus::{
    format_duration, format_duration_mmss, render_progress_bar, FocusSession, TimerSnapshot,
};
use crate::features::stats::{
    render_daily_chart, render_goal_bar, render_sparkline, render_summary_box, Achievement,
    AchievementKind, FocusStats, Goals,
};

/// Format a single session as one history line
pub fn format_session_line(session: &FocusSession) -> String {
    let icon = if session.completed {
        "[x]".green()
    } else {
        "[-]".yellow()
    };
    let summary = if session.is_focus() {
        session.summary().bold().to_string()
    } else {
        session.summary().cyan().to_string()
    };

    format!("{icon} {summary}  {}", session.date.to_string().dimmed())
}

/// Format session history, newest first
pub fn format_history_pretty(sessions: &[FocusSession]) -> String {
    if sessions.is_empty() {
        return "Session History (0 sessions)\n  No sessions yet".to_string();
    }

    let mut output = format!("Session History ({} sessions)\n", sessions.len());
    output.push_str(&"─".repeat(50));
    output.push('\n');

    for session in sessions {
        output.push_str(&format_session_line(session));
        output.push('\n');
    }

    output
}

/// Format the stats dashboard
pub fn format_stats_pretty(
    stats: &FocusStats,
    achievements: &[Achievement],
    goals: &Goals,
) -> String {
    let mut output = Vec::new();

    let streak = match stats.streak_days {
        1 => "1 day".to_string(),
        n => format!("{n} days"),
    };
    output.push(render_summary_box(
        "Focus Summary",
        &[
            ("Today", format_duration(Duration::minutes(i64::from(stats.today_minutes)))),
            ("This week", format_duration(Duration::minutes(i64::from(stats.week_minutes)))),
            ("Sessions", stats.total_sessions.to_string()),
            ("Completed", stats.completed_sessions.to_string()),
            ("Completion", format!("{}%", stats.completion_rate)),
            ("Streak", streak),
        ],
    ));
    output.push(String::new());

    output.push("GOALS".bold().to_string());
    output.push("─".repeat(50));
    output.push(format!(
        "  Daily   {}",
        render_goal_bar(stats.today_minutes, goals.daily_minutes, 20)
    ));
    output.push(format!(
        "  Weekly  {}",
        render_goal_bar(stats.week_minutes, goals.weekly_minutes, 20)
    ));
    output.push(String::new());

    output.push(stats.period.display_name().to_uppercase().bold().to_string());
    output.push("─".repeat(50));
    if stats.daily.len() > 1 {
        let minutes: Vec<u32> = stats.daily.iter().map(|d| d.minutes).collect();
        output.push(format!("  Trend: {}", render_sparkline(&minutes)));
    }
    output.push(render_daily_chart(&stats.daily));
    output.push(String::new());

    output.push("ACHIEVEMENTS".bold().to_string());
    output.push("─".repeat(50));
    for achievement in achievements {
        output.push(format_achievement(achievement));
    }

    output.join("\n")
}

fn format_achievement(achievement: &Achievement) -> String {
    let tag = match achievement.kind {
        AchievementKind::Daily => "daily",
        AchievementKind::Weekly => "weekly",
        AchievementKind::Milestone => "milestone",
    };

    if achievement.achieved {
        format!("  {} {} {}", "★".yellow(), achievement.message.green(), tag.dimmed())
    } else {
        format!("  {} {} {}", "☆".dimmed(), achievement.message, tag.dimmed())
    }
}

/// Format one timer status line, as printed by `run`
pub fn format_snapshot(snapshot: &TimerSnapshot, progress: f64) -> String {
    let remaining = format_duration_mmss(Duration::seconds(i64::from(snapshot.remaining_seconds)));
    let phase = if snapshot.phase.is_break() {
        snapshot.phase.display_name().cyan()
    } else {
        snapshot.phase.display_name().red()
    };
    let state = if snapshot.running { "" } else { " (stopped)" };

    format!(
        "{phase} {} {}{}",
        remaining.bold(),
        render_progress_bar(progress, 30),
        state.dimmed()
    )
}
