//! UI rendering for the TUI.

use chrono::Duration;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::features::focus::format_duration_mmss;
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, clock, gauge, sessions, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Clock
            Constraint::Length(3), // Gauge
            Constraint::Min(0),    // Sessions
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_clock(frame, app, chunks[1]);
    render_gauge(frame, app, chunks[2]);
    render_sessions(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

fn phase_color(app: &App) -> Color {
    if app.snapshot.phase.is_break() {
        Color::Cyan
    } else {
        Color::Red
    }
}

fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = if app.snapshot.running { "running" } else { "stopped" };
    let title = format!(
        " {} ({state}) | {} focus minutes today ",
        app.snapshot.phase.display_name(),
        app.focus_minutes_today()
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(phase_color(app))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(phase_color(app))),
        );

    frame.render_widget(header, area);
}

fn render_clock(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let remaining =
        format_duration_mmss(Duration::seconds(i64::from(app.snapshot.remaining_seconds)));

    let clock = Paragraph::new(remaining)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(clock, area);
}

fn render_gauge(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(phase_color(app)))
        .ratio(app.progress.clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}

fn render_sessions(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .recent
        .iter()
        .map(|session| {
            let (icon, color) = if session.completed {
                ("[x]", Color::Green)
            } else {
                ("[-]", Color::Yellow)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{icon} "), Style::default().fg(color)),
                Span::raw(session.summary()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Today ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut status_text = app.status.clone().unwrap_or_default();
    if app.degraded {
        status_text.push_str(" | ledger unavailable, sessions kept in memory");
    }

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::{Phase, TimerSnapshot};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_idle_timer() {
        let app = App::new(
            TimerSnapshot {
                phase: Phase::Focus,
                remaining_seconds: 1500,
                running: false,
            },
            Vec::new(),
        );
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Focus (stopped)"));
        assert!(text.contains("25:00"));
        assert!(text.contains("space:start/stop"));
    }

    #[test]
    fn test_render_degraded_notice() {
        let mut app = App::new(
            TimerSnapshot {
                phase: Phase::Break,
                remaining_seconds: 61,
                running: true,
            },
            Vec::new(),
        );
        app.degraded = true;
        app.status = None;
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("01:01"));
        assert!(text.contains("ledger unavailable"));
    }
}
