//! FigureKit Settings Crate
//!
//! Handles application configuration: drawing defaults, canvas size, history
//! depth and recent files, persisted as TOML or JSON.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, DrawingDefaults, HistorySettings, CONFIG_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
