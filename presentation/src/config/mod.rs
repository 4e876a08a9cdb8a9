//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use bggovai_domain::{HISTORY_DISPLAY_LIMIT, OutputFormat, TRANSCRIPT_DISPLAY_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show the spinner while the model answers
    pub show_progress: bool,
    /// Entries listed by `/history`
    pub history_limit: usize,
    /// Messages listed by `/transcript`
    pub transcript_limit: usize,
    /// Path to the line-editor history file
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_limit: HISTORY_DISPLAY_LIMIT,
            transcript_limit: TRANSCRIPT_DISPLAY_LIMIT,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// The configured history file, else `<data dir>/bggovai/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("bggovai").join("history.txt")))
    }
}
