//! Terminal charts for focus statistics.

use super::report::DailyFocus;

/// Characters for sparkline rendering.
const SPARK_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a horizontal bar chart of `(label, value)` pairs.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_bar_chart(data: &[(String, u32)], label_width: usize, bar_width: usize) -> String {
    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);

    data.iter()
        .map(|(label, value)| {
            let label: String = label.chars().take(label_width).collect();
            let bar_length = ((f64::from(*value) / f64::from(max_value)) * bar_width as f64)
                as usize;
            format!(
                "{label:<label_width$} |{}{} {value}",
                FULL_BLOCK.to_string().repeat(bar_length),
                " ".repeat(bar_width - bar_length),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a sparkline (compact inline chart).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_sparkline(values: &[u32]) -> String {
    let max_value = values.iter().copied().max().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                return SPARK_CHARS[0];
            }
            let level = (f64::from(v) / f64::from(max_value) * 7.0) as usize;
            SPARK_CHARS[level.clamp(1, 7)]
        })
        .collect()
}

/// Bar chart of focus minutes per day, oldest first.
#[must_use]
pub fn render_daily_chart(daily: &[DailyFocus]) -> String {
    let data: Vec<(String, u32)> = daily
        .iter()
        .map(|day| (day.date.format("%b %d").to_string(), day.minutes))
        .collect();

    render_bar_chart(&data, 6, 30)
}

/// Render progress toward a goal.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_goal_bar(current: u32, target: u32, width: usize) -> String {
    let target = target.max(1);
    let progress = (f64::from(current) / f64::from(target)).min(1.0);
    let filled = (progress * width as f64) as usize;
    let empty = width - filled;

    format!(
        "[{}{}] {current}/{target}",
        FULL_BLOCK.to_string().repeat(filled),
        "░".repeat(empty)
    )
}

/// Render a summary box with key metrics.
#[must_use]
pub fn render_summary_box(title: &str, items: &[(&str, String)]) -> String {
    let label_width = items.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let value_width = items.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let inner = (label_width + value_width + 3).max(title.chars().count()) + 2;

    let mut lines = Vec::new();
    lines.push(format!("┌{}┐", "─".repeat(inner)));
    lines.push(format!("│{title:^inner$}│"));
    lines.push(format!("├{}┤", "─".repeat(inner)));

    for (label, value) in items {
        let item = format!("{label:>label_width$} : {value}");
        lines.push(format!("│ {item:<width$} │", width = inner - 2));
    }

    lines.push(format!("└{}┘", "─".repeat(inner)));
    lines.join("\n")
}
