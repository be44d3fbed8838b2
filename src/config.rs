//! Configuration file load/save (JSON)

use crate::core::assembler::Style;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Converter settings
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ConverterConfig {
    /// Opening transcription delimiter
    #[serde(default = "default_left_bracket")]
    pub left_bracket: String,
    /// Closing transcription delimiter
    #[serde(default = "default_right_bracket")]
    pub right_bracket: String,
    /// Marker between unstressed interior syllables
    #[serde(default = "default_syllable_marker")]
    pub syllable_marker: String,
    /// Drop exact-duplicate output rows
    #[serde(default = "default_dedup")]
    pub dedup: bool,
}

fn default_left_bracket() -> String {
    "/".to_string()
}

fn default_right_bracket() -> String {
    "/".to_string()
}

fn default_syllable_marker() -> String {
    ".".to_string()
}

fn default_dedup() -> bool {
    true
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            left_bracket: default_left_bracket(),
            right_bracket: default_right_bracket(),
            syllable_marker: default_syllable_marker(),
            dedup: default_dedup(),
        }
    }
}

impl ConverterConfig {
    /// Output styling for the assembler
    pub fn style(&self) -> Style {
        Style {
            left_bracket: self.left_bracket.clone(),
            right_bracket: self.right_bracket.clone(),
            syllable_marker: self.syllable_marker.clone(),
        }
    }
}

/// Load configuration (defaults when no path is given or the file is
/// missing/unparsable)
pub fn load_config(path: Option<&Path>) -> ConverterConfig {
    let path = match path {
        Some(path) => path,
        None => return ConverterConfig::default(),
    };
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("invalid config {}: {}; using defaults", path.display(), e);
            ConverterConfig::default()
        }),
        Err(_) => ConverterConfig::default(),
    }
}
