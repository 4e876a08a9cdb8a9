//! Slash commands understood by the chat REPL

/// A parsed `/command` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    History,
    Transcript,
    ToggleSources,
    ToggleDebug,
    Clear,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`; other lines are questions.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }

        let name = line.split_whitespace().next().unwrap_or(line);
        Some(match name {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/history" => ReplCommand::History,
            "/transcript" => ReplCommand::Transcript,
            "/sources" => ReplCommand::ToggleSources,
            "/debug" => ReplCommand::ToggleDebug,
            "/clear" => ReplCommand::Clear,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        })
    }

    pub fn help_text() -> &'static str {
        "Команди:\n  \
         /help, /h, /?      - Помощ\n  \
         /history           - История (сесия)\n  \
         /transcript        - Чат историята (последните съобщения)\n  \
         /sources           - Вкл./изкл. официалните източници\n  \
         /debug             - Вкл./изкл. техническите детайли\n  \
         /clear             - Нова сесия\n  \
         /quit, /exit, /q   - Изход"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/help"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("  /q "), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/sources"), Some(ReplCommand::ToggleSources));
        assert_eq!(ReplCommand::parse("/debug on"), Some(ReplCommand::ToggleDebug));
        assert_eq!(
            ReplCommand::parse("/models"),
            Some(ReplCommand::Unknown("/models".to_string()))
        );
    }

    #[test]
    fn test_questions_are_not_commands() {
        assert_eq!(ReplCommand::parse("Как да платя данък?"), None);
        assert_eq!(ReplCommand::parse("чл. 50 / ЗДДФЛ"), None);
    }
}
