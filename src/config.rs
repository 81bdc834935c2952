//! Theme configuration loaded from TOML.
//!
//! Every key is optional; missing keys fall back to the built-in colors.
//!
//! ```toml
//! x_color = "lightblue"
//! o_color = "#ff5f5f"
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Color names as written in the theme file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Color of X marks.
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color of O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Color of grid lines and empty-cell hints.
    #[serde(default = "default_grid_color")]
    grid_color: String,

    /// Color of the title bar.
    #[serde(default = "default_title_color")]
    title_color: String,

    /// Color of the status line.
    #[serde(default = "default_status_color")]
    status_color: String,

    /// Background of the keyboard cursor cell.
    #[serde(default = "default_highlight_color")]
    highlight_color: String,
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_grid_color() -> String {
    "darkgray".to_string()
}

fn default_title_color() -> String {
    "cyan".to_string()
}

fn default_status_color() -> String {
    "yellow".to_string()
}

fn default_highlight_color() -> String {
    "white".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            grid_color: default_grid_color(),
            title_color: default_title_color(),
            status_color: default_status_color(),
            highlight_color: default_highlight_color(),
        }
    }
}

impl ThemeConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading theme from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the color names into a [`Theme`].
    #[instrument(skip(self))]
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
            grid: parse_color("grid_color", &self.grid_color)?,
            title: parse_color("title_color", &self.title_color)?,
            status: parse_color("status_color", &self.status_color)?,
            highlight: parse_color("highlight_color", &self.highlight_color)?,
        })
    }
}

#[track_caller]
fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Unknown color {:?} for {}", value, key)))
}

/// Loads the theme from `path`, or the built-in theme when no path is given.
#[instrument]
pub fn load_theme(path: Option<&Path>) -> Result<Theme, ConfigError> {
    match path {
        Some(path) => {
            let theme = ThemeConfig::from_file(path)?.theme()?;
            info!(path = %path.display(), "Theme loaded");
            Ok(theme)
        }
        None => Ok(Theme::default()),
    }
}

/// Resolved colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Color of X marks.
    pub x: Color,
    /// Color of O marks.
    pub o: Color,
    /// Color of grid lines.
    pub grid: Color,
    /// Color of the title.
    pub title: Color,
    /// Color of the status line.
    pub status: Color,
    /// Background of the cursor cell.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            grid: Color::DarkGray,
            title: Color::Cyan,
            status: Color::Yellow,
            highlight: Color::White,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
