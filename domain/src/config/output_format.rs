//! Output format value object

use serde::{Deserialize, Serialize};

/// How an answered turn is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Rendered cards for the terminal (default)
    #[default]
    Text,
    /// The whole turn as JSON
    Json,
}
