use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};

pub const MIN_FONT_SIZE: u32 = 10;
pub const MAX_FONT_SIZE: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

/// Read-only startup configuration. The calculator never writes this file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    /// Display font size in points
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// tracing filter directive, e.g. "debug" or "ferris_calc=trace"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_font_size() -> u32 {
    24
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            font_size: default_font_size(),
            log_level: default_log_level(),
        }
    }
}

impl AppSettings {
    /// Load from the user config directory.
    ///
    /// Always yields usable settings; the error, if any, is handed back so the
    /// caller can report it once logging is up.
    pub fn load() -> (Self, Option<AppError>) {
        Self::load_or_default(&Self::get_config_path())
    }

    /// Load from `path`. A missing file is not an error; anything else falls
    /// back to defaults and returns the cause.
    pub fn load_or_default(path: &Path) -> (Self, Option<AppError>) {
        match Self::load_from(path) {
            Ok(settings) => (settings, None),
            Err(AppError::Io(e)) if e.kind() == ErrorKind::NotFound => (Self::default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: AppSettings = serde_json::from_str(&contents)?;
        settings.validated()
    }

    fn validated(mut self) -> Result<Self> {
        if self.log_level.trim().is_empty() {
            return Err(AppError::Settings("log_level must not be empty".to_string()));
        }
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        Ok(self)
    }

    /// Get the path to the settings file
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("ferriscalc");
        path.push("settings.json");
        path
    }
}
