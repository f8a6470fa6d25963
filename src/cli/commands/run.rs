//! Foreground timer command.

use std::io::Write;

use chrono::Duration;
use colored::Colorize;
use tracing::info;

use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::Config;
use crate::error::FocusError;
use crate::features::focus::{
    format_duration, FocusTimer, IntervalTicks, SessionLedger, StopReason, SystemClock,
    TickSource, TimerDriver, TimerEvent,
};
use crate::output::{format_session_line, format_snapshot, to_json};

/// Run `args.phases` intervals back to back.
///
/// # Errors
///
/// Returns an error if writing progress to stdout fails or output formatting
/// fails.
pub fn run<L: SessionLedger>(
    ledger: L,
    config: &Config,
    args: &RunArgs,
    format: OutputFormat,
) -> Result<String, FocusError> {
    let mut source = IntervalTicks::every_second();
    run_with_source(ledger, config, args, format, &mut source)
}

fn run_with_source<L: SessionLedger, S: TickSource + ?Sized>(
    ledger: L,
    config: &Config,
    args: &RunArgs,
    format: OutputFormat,
    source: &mut S,
) -> Result<String, FocusError> {
    let mut timer = FocusTimer::with_clock(ledger, SystemClock, config.durations());
    let show_progress = format == OutputFormat::Pretty && !args.no_progress;
    let mut stdout = std::io::stdout();

    info!(phases = args.phases, "running timer");
    timer.start();
    let outcome = TimerDriver::new()
        .auto_continue(true)
        .phase_limit(args.phases)
        .run(&mut timer, source, |timer, event, logged| {
            if format != OutputFormat::Pretty {
                return Ok(());
            }
            if let Some(session) = logged {
                writeln!(stdout, "\r{}", format_session_line(session))?;
            } else if show_progress && event == TimerEvent::Tick {
                write!(
                    stdout,
                    "\r{}",
                    format_snapshot(&timer.snapshot(), timer.progress())
                )?;
                stdout.flush()?;
            }
            Ok(())
        })?;

    let degraded = timer.ledger().is_degraded();
    match format {
        OutputFormat::Json => to_json(&outcome.logged),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            let focused = outcome
                .logged
                .iter()
                .filter(|s| s.is_focus() && s.completed)
                .fold(0_u32, |total, s| total.saturating_add(s.duration));

            let done = if outcome.reason == StopReason::PhaseLimit {
                "Done!".green().to_string()
            } else {
                "Stopped.".yellow().to_string()
            };
            output.push(format!(
                "{done} {} interval{} completed, {} focused",
                outcome.completed_phases,
                if outcome.completed_phases == 1 { "" } else { "s" },
                format_duration(Duration::minutes(i64::from(focused)))
            ));
            if degraded {
                output.push(
                    "   Sessions could not be saved and were kept in memory only"
                        .red()
                        .to_string(),
                );
            }

            Ok(output.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::{MemoryLedger, Phase, ScriptedTicks};

    fn short_config() -> Config {
        let mut config = Config::default();
        config.timer.focus_minutes = 1;
        config.timer.break_minutes = 1;
        config
    }

    #[test]
    fn test_run_two_phases_json() {
        let args = RunArgs {
            phases: 2,
            no_progress: true,
        };
        let mut source = ScriptedTicks::default().then_ticks(200);

        let output = run_with_source(
            MemoryLedger::new(),
            &short_config(),
            &args,
            OutputFormat::Json,
            &mut source,
        )
        .unwrap();

        let logged: Vec<crate::features::focus::FocusSession> =
            serde_json::from_str(&output).unwrap();
        assert_eq!(logged.len(), 2);
        assert_eq!(logged[0].session_type, Phase::Focus);
        assert_eq!(logged[1].session_type, Phase::Break);
        assert!(logged.iter().all(|s| s.completed && s.duration == 1));
    }

    #[test]
    fn test_run_summary_when_source_ends_early() {
        colored::control::set_override(false);
        let args = RunArgs {
            phases: 1,
            no_progress: true,
        };
        let mut source = ScriptedTicks::default().then_ticks(10);

        let output = run_with_source(
            MemoryLedger::new(),
            &short_config(),
            &args,
            OutputFormat::Pretty,
            &mut source,
        )
        .unwrap();

        assert_eq!(output, "Stopped. 0 intervals completed, 0 seconds focused");
    }

    #[test]
    fn test_run_summary_after_completion() {
        colored::control::set_override(false);
        let args = RunArgs {
            phases: 1,
            no_progress: true,
        };
        let mut source = ScriptedTicks::default().then_ticks(60);

        let output = run_with_source(
            MemoryLedger::new(),
            &short_config(),
            &args,
            OutputFormat::Pretty,
            &mut source,
        )
        .unwrap();

        assert_eq!(output, "Done! 1 interval completed, 1 minute focused");
    }
}
