//! Immutable style configuration passed to every render call.
//!
//! Loaded from TOML; every field is optional and falls back to the default
//! neon-on-charcoal palette.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading a style file.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid style TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to encode style: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// An RGB colour, written as `[r, g, b]` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Point marker used to draw plot series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    #[default]
    Braille,
    Dot,
    Block,
    HalfBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Window title.
    pub title: String,
    /// Minimum window width in columns; narrower terminals get a notice.
    pub min_width: u16,
    /// Render widget text in bold.
    pub bold: bool,
    pub accent: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub error: Rgb,
    /// Series colours, cycled per plotted series.
    pub palette: Vec<Rgb>,
    pub marker: Marker,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            title: "QuickUI".to_string(),
            min_width: 80,
            bold: true,
            accent: Rgb(0, 255, 255),
            text: Rgb(255, 255, 255),
            muted: Rgb(100, 149, 237),
            error: Rgb(255, 20, 147),
            palette: vec![
                Rgb(0, 255, 255),
                Rgb(255, 140, 0),
                Rgb(0, 255, 128),
                Rgb(255, 20, 147),
                Rgb(147, 112, 219),
            ],
            marker: Marker::Braille,
        }
    }
}

impl Style {
    pub fn from_toml_str(content: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, StyleError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Colour for the `index`-th series. An empty palette falls back to the accent.
    pub fn series_color(&self, index: usize) -> Rgb {
        if self.palette.is_empty() {
            self.accent
        } else {
            self.palette[index % self.palette.len()]
        }
    }
}
