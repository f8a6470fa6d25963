//! Configuration management for focuskit.
//!
//! This module handles loading and saving configuration from `~/.focuskit/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    ColorSetting, Config, GeneralConfig, LoggingConfig, StatsConfig, StorageBackend,
    StorageConfig, TimerConfig,
};
