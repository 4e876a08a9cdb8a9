//! Output formatter trait

use bggovai_domain::{AdvisorTurn, DisplayOptions};

/// Trait for rendering advisor turns
pub trait OutputFormatter {
    /// Render a turn as terminal cards
    fn format_turn(&self, turn: &AdvisorTurn, display: &DisplayOptions) -> String;

    /// Render a turn as JSON
    fn format_json(&self, turn: &AdvisorTurn) -> String;
}
