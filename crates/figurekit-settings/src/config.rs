//! Configuration and settings management for FigureKit
//!
//! Supports JSON and TOML file formats stored in the platform config
//! directory. Configuration is organized into sections:
//! - Drawing defaults (tool, style essentials)
//! - Canvas size
//! - Undo history depth

use std::path::{Path, PathBuf};

use figurekit_core::Essentials;
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// File name used inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Defaults applied to newly drawn figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingDefaults {
    /// Tool selected at startup
    pub tool: Option<String>,
    /// Pen, brush, width and radius
    pub ess: Essentials,
}

impl Default for DrawingDefaults {
    fn default() -> Self {
        Self {
            tool: Some("hand".to_string()),
            ess: Essentials::default(),
        }
    }
}

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: i32,
    pub height: i32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Undo/redo settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of undoable commands
    pub limit: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self { limit: 100 }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recent documents, newest first
    pub recent_files: Vec<PathBuf>,
    /// Number of recent files to track
    pub recent_files_count: usize,
    pub drawing: DrawingDefaults,
    pub canvas: CanvasSettings,
    pub history: HistorySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_files: Vec::new(),
            recent_files_count: 10,
            drawing: DrawingDefaults::default(),
            canvas: CanvasSettings::default(),
            history: HistorySettings::default(),
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/figurekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no config directory on this platform".to_string())
        })?;
        Ok(dir.join("figurekit").join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the config at `path`, falling back to defaults when it is
    /// missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load_from_file(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.canvas.width <= 0 || self.canvas.height <= 0 {
            return Err(SettingsError::invalid("canvas", "dimensions must be > 0"));
        }

        if self.history.limit == 0 {
            return Err(SettingsError::invalid("history.limit", "must be > 0"));
        }

        let ess = &self.drawing.ess;
        if ess.pen_width < 1 {
            return Err(SettingsError::invalid("drawing.ess.pen_width", "must be >= 1"));
        }
        if ess.radius < 1 {
            return Err(SettingsError::invalid("drawing.ess.radius", "must be >= 1"));
        }

        if self.drawing.tool.as_deref().is_some_and(str::is_empty) {
            return Err(SettingsError::invalid("drawing.tool", "must not be empty"));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(self.recent_files_count);
    }
}
