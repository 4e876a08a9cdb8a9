//! User-controlled display toggles

use serde::{Deserialize, Serialize};

/// Which optional sections accompany an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// List the routed institutions ("Провери източници")
    pub show_sources: bool,
    /// Show the technical details block
    pub show_debug: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_sources: true,
            show_debug: false,
        }
    }
}

impl DisplayOptions {
    pub fn toggle_sources(&mut self) -> bool {
        self.show_sources = !self.show_sources;
        self.show_sources
    }

    pub fn toggle_debug(&mut self) -> bool {
        self.show_debug = !self.show_debug;
        self.show_debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DisplayOptions::default();
        assert!(options.show_sources);
        assert!(!options.show_debug);
    }

    #[test]
    fn test_toggles() {
        let mut options = DisplayOptions::default();
        assert!(!options.toggle_sources());
        assert!(options.toggle_debug());
        assert!(options.toggle_sources());
    }
}
