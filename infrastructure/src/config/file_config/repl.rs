//! REPL configuration from TOML (`[repl]` section)

use bggovai_domain::{HISTORY_DISPLAY_LIMIT, TRANSCRIPT_DISPLAY_LIMIT};
use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the spinner while the model answers
    pub show_progress: bool,
    /// Show official sources under each answer
    pub show_sources: bool,
    /// Show the technical details block
    pub show_debug: bool,
    /// Entries listed by `/history`
    pub history_limit: usize,
    /// Messages listed by `/transcript`
    pub transcript_limit: usize,
    /// Path to the line-editor history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            show_sources: true,
            show_debug: false,
            history_limit: HISTORY_DISPLAY_LIMIT,
            transcript_limit: TRANSCRIPT_DISPLAY_LIMIT,
            history_file: None,
        }
    }
}
