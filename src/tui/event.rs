//! Keyboard input merged with the one-second tick.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::FocusError;
use crate::features::focus::{IntervalTicks, TickSource, TimerEvent};

/// Map a key press to a timer event.
pub fn map_key(key: KeyEvent) -> Option<TimerEvent> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(TimerEvent::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(TimerEvent::Quit),
        KeyCode::Char(' ') | KeyCode::Enter => Some(TimerEvent::Toggle),
        KeyCode::Char('r') => Some(TimerEvent::Reset),
        _ => None,
    }
}

/// Tick source that also reports key presses.
///
/// Waits for input only until the next tick is due, so ticks keep their
/// one-second cadence while keys are handled immediately.
pub struct TerminalEvents {
    ticks: IntervalTicks,
}

impl TerminalEvents {
    /// Tick once per second.
    pub fn new() -> Self {
        Self {
            ticks: IntervalTicks::every_second(),
        }
    }
}

impl TickSource for TerminalEvents {
    fn next_event(&mut self) -> Result<Option<TimerEvent>, FocusError> {
        loop {
            let wait = self.ticks.until_next();
            if wait.is_zero() {
                self.ticks.advance();
                return Ok(Some(TimerEvent::Tick));
            }

            if event::poll(wait)
                .map_err(|e| FocusError::Terminal(format!("Event poll failed: {e}")))?
            {
                if let Event::Key(key) = event::read()
                    .map_err(|e| FocusError::Terminal(format!("Event read failed: {e}")))?
                {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(timer_event) = map_key(key) {
                        return Ok(Some(timer_event));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(TimerEvent::Toggle));
        assert_eq!(map_key(key(KeyCode::Enter)), Some(TimerEvent::Toggle));
        assert_eq!(map_key(key(KeyCode::Char('r'))), Some(TimerEvent::Reset));
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(TimerEvent::Quit));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(TimerEvent::Quit));
        assert_eq!(map_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(TimerEvent::Quit));
    }
}
