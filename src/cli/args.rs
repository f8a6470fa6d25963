use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::features::stats::StatsPeriod;

#[derive(Parser)]
#[command(name = "focuskit")]
#[command(about = "A Pomodoro focus timer with a persistent session ledger")]
#[command(long_about = "focuskit - A Pomodoro focus timer for the terminal

Counts down 25-minute focus intervals alternating with 5-minute breaks,
and records every interval you finish or stop early in a local ledger.

QUICK START:
  focuskit run              Run one focus interval
  focuskit run --phases 4   Focus, break, focus, break
  focuskit tui              Interactive timer (space to start/stop)
  focuskit history          Recent focus sessions
  focuskit stats            Today, this week, streaks, and goals

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  focuskit <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output suitable for scripting. Defaults to the
    /// `general.default_output` config value.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Data directory (default: ~/.focuskit)
    #[arg(long, env = "FOCUSKIT_HOME", global = true)]
    pub home: Option<PathBuf>,

    /// Also log to stderr, at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the timer in the foreground
    ///
    /// Starts a focus interval immediately and counts it down, printing
    /// progress once a second. When an interval completes the next one
    /// starts on its own until the requested number of intervals is done.
    /// Press Ctrl-C to abandon the current interval.
    ///
    /// # Examples
    ///
    ///   focuskit run                 One focus interval
    ///   focuskit run --phases 2      Focus, then break
    ///   focuskit run -o json         Print logged sessions as JSON
    #[command(alias = "r")]
    Run(RunArgs),

    /// Interactive timer
    ///
    /// Full-screen countdown with today's sessions.
    ///
    /// # Keys
    ///
    ///   space     Start or stop
    ///   r         Reset to a fresh focus interval
    ///   q, Esc    Quit
    Tui,

    /// List recorded sessions
    ///
    /// Shows the most recent focus sessions, newest first.
    ///
    /// # Examples
    ///
    ///   focuskit history             Last 20 focus sessions
    ///   focuskit history --all       Include breaks
    ///   focuskit history -n 5 -o json
    #[command(alias = "h")]
    History(HistoryArgs),

    /// Show focus statistics and goals
    ///
    /// Today's and this week's focus minutes, completion rate, streak,
    /// a per-day chart, and achievement progress.
    ///
    /// # Examples
    ///
    ///   focuskit stats                  Last 7 days
    ///   focuskit stats --period month   Last 30 days
    #[command(alias = "s")]
    Stats(StatsArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: focuskit completions bash > ~/.bash_completion.d/focuskit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the run command.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Number of intervals to run, focus and break alternating
    #[arg(long, short = 'p', default_value_t = 1)]
    pub phases: usize,

    /// Don't redraw the progress line every second
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the history command.
#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// Maximum number of sessions to show
    #[arg(long, short = 'n', default_value_t = 20)]
    pub limit: usize,

    /// Include break sessions
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Arguments for the stats command.
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Period for the per-day breakdown (day, week, month)
    #[arg(long, short = 'p', default_value = "week")]
    pub period: StatsPeriod,
}

/// Arguments for the config command.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the configuration file location
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
