//! Configuration settings for focuskit.
//!
//! Settings are loaded from `~/.focuskit/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::FocusError;
use crate::features::focus::{PhaseDurations, MAX_PHASE_MINUTES};
use crate::features::stats::Goals;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerConfig,
    /// Session ledger settings.
    pub storage: StorageConfig,
    /// Statistics goals.
    pub stats: StatsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus interval length in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Break interval length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

/// Where sessions are recorded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// `SQLite` database file.
    #[default]
    Sqlite,
    /// JSON array file.
    Json,
    /// Nothing persisted beyond the process.
    Memory,
}

/// Session ledger settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Ledger backend.
    pub backend: StorageBackend,
}

/// Statistics goals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StatsConfig {
    /// Focus minutes per day.
    #[serde(default = "default_daily_goal")]
    pub daily_goal_minutes: u32,
    /// Focus minutes per rolling week.
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal_minutes: u32,
    /// Lifetime sessions for the milestone achievement.
    #[serde(default = "default_milestone")]
    pub milestone_sessions: u32,
    /// Completion rate (percent) for the consistency achievement.
    #[serde(default = "default_consistency")]
    pub consistency_rate: u32,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Write daily log files under `logs/`.
    #[serde(default = "default_true")]
    pub file: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_focus_minutes() -> u32 {
    crate::features::focus::FOCUS_MINUTES
}

const fn default_break_minutes() -> u32 {
    crate::features::focus::BREAK_MINUTES
}

const fn default_daily_goal() -> u32 {
    50
}

const fn default_weekly_goal() -> u32 {
    1000
}

const fn default_milestone() -> u32 {
    100
}

const fn default_consistency() -> u32 {
    90
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            daily_goal_minutes: default_daily_goal(),
            weekly_goal_minutes: default_weekly_goal(),
            milestone_sessions: default_milestone(),
            consistency_rate: default_consistency(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// holds values the timer cannot use.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FocusError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FocusError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            FocusError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), FocusError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| FocusError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            FocusError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, FocusError> {
        serde_yaml::to_string(self)
            .map_err(|e| FocusError::Config(format!("Failed to serialize config: {e}")))
    }

    /// Reject values the timer cannot run with.
    ///
    /// # Errors
    ///
    /// Returns an error if an interval length is zero or longer than a day.
    pub fn validate(&self) -> Result<(), FocusError> {
        let allowed = 1..=MAX_PHASE_MINUTES;
        if !allowed.contains(&self.timer.focus_minutes)
            || !allowed.contains(&self.timer.break_minutes)
        {
            return Err(FocusError::Config(format!(
                "timer.focus_minutes and timer.break_minutes must be at least 1 and at most {MAX_PHASE_MINUTES}"
            )));
        }
        Ok(())
    }

    /// Interval lengths for the timer.
    #[must_use]
    pub const fn durations(&self) -> PhaseDurations {
        PhaseDurations {
            focus_minutes: self.timer.focus_minutes,
            break_minutes: self.timer.break_minutes,
        }
    }

    /// Thresholds for achievements.
    #[must_use]
    pub const fn goals(&self) -> Goals {
        Goals {
            daily_minutes: self.stats.daily_goal_minutes,
            weekly_minutes: self.stats.weekly_goal_minutes,
            milestone_sessions: self.stats.milestone_sessions,
            consistency_rate: self.stats.consistency_rate,
            pomodoro_minutes: self.timer.focus_minutes,
        }
    }
}
