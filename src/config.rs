//! Configuration for loading schedules and rendering diagrams.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! [render]
//! unicode = false
//! format = "svg"
//!
//! [dataset]
//! delimiter = ";"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;

// ─── OutputFormat ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Box-drawing text, one diagram after another.
    #[default]
    Ascii,
    Svg,
    /// The positioned diagram model itself.
    Json,
}

// ─── RenderConfig ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Use Unicode box-drawing characters (true) or plain ASCII (false).
    pub unicode: bool,
    /// Padding inside train boxes (in characters).
    pub padding: usize,
    pub format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            padding: 1,
            format: OutputFormat::Ascii,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

// ─── DatasetConfig ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Field delimiter of the schedule CSV.
    pub delimiter: char,
    /// Strip surrounding whitespace from every cell while loading.
    pub trim: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            trim: true,
        }
    }
}

impl DatasetConfig {
    /// The delimiter as the single byte the csv reader expects.
    pub fn delimiter_byte(&self) -> Result<u8, RosterError> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                RosterError::Config(format!(
                    "delimiter must be a single ASCII character, found {:?}",
                    self.delimiter
                ))
            })
    }
}

// ─── AppConfig ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub render: RenderConfig,
    pub dataset: DatasetConfig,
}

impl AppConfig {
    /// Read a `.toml` or `.json` configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        if extension != "toml" && extension != "json" {
            return Err(RosterError::Config(format!(
                "unsupported file type: {}",
                path.display()
            )));
        }
        let text = std::fs::read_to_string(path).map_err(|e| RosterError::io(path, e))?;
        let decoded: Result<Self, String> = if extension == "toml" {
            toml::from_str(&text).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&text).map_err(|e| e.to_string())
        };
        decoded.map_err(|e| {
            RosterError::Config(format!("failure decoding {}: {e}", path.display()))
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
