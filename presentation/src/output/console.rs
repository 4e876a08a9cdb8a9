//! Console output formatter for advisor turns

use crate::output::formatter::OutputFormatter;
use bggovai_domain::{
    AdvisorSession, AdvisorTurn, DisplayOptions, Institution, Role, TurnDebug,
};
use colored::Colorize;

/// Formats advisor turns and session views for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render one answered question.
    ///
    /// Cards in order: summary, details (when present), follow-up, official
    /// sources (when enabled), technical details (when enabled).
    pub fn format_turn(turn: &AdvisorTurn, display: &DisplayOptions) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", turn.title.bold()));

        output.push_str(&Self::card("Резюме", &turn.reply.summary));

        if turn.reply.has_details() {
            output.push_str(&Self::card("Подробности", &turn.reply.details));
        }

        if let Some(followup) = turn.clarification {
            output.push_str(&Self::section_header("За да продължа точно"));
            output.push_str(&format!("{} {}\n", "👉", followup.yellow()));
        }

        if display.show_sources {
            output.push_str(&Self::format_sources(&turn.institutions));
        }

        if display.show_debug {
            output.push_str(&Self::format_debug(&turn.debug));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(turn: &AdvisorTurn) -> String {
        serde_json::to_string_pretty(turn).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_sources(institutions: &[&Institution]) -> String {
        let mut output = Self::section_header("Официални държавни институции");
        for institution in institutions {
            output.push_str(&format!(
                "  - {} {}\n",
                institution.name,
                institution.url.dimmed()
            ));
        }
        output
    }

    pub fn format_debug(debug: &TurnDebug) -> String {
        let mut output = Self::section_header("Технически детайли");
        output.push_str(&format!("  topic:         {}\n", debug.topic.code()));
        output.push_str(&format!(
            "  followup:      {}\n",
            debug.followup.unwrap_or("-")
        ));
        output.push_str(&format!("  model:         {}\n", debug.model));
        output.push_str(&format!("  sources_count: {}\n", debug.sources_count));
        if debug.cached {
            output.push_str("  cached:        true\n");
        }
        output
    }

    /// Session history, newest first.
    pub fn format_history(session: &AdvisorSession, limit: usize) -> String {
        if session.is_empty() {
            return format!("{}\n", "Няма въпроси в тази сесия.".dimmed());
        }

        let mut output = Self::section_header("История (сесия)");
        for entry in session.recent_history(limit) {
            output.push_str(&format!("  {}\n", entry.title.bold()));
            output.push_str(&format!("    {}\n", entry.question.dimmed()));
        }
        output
    }

    /// The last `limit` messages in chronological order.
    pub fn format_transcript(session: &AdvisorSession, limit: usize) -> String {
        let messages = session.recent_messages(limit);
        if messages.is_empty() {
            return format!("{}\n", "Няма съобщения в тази сесия.".dimmed());
        }

        let mut output = String::new();
        for message in messages {
            let label = match message.role {
                Role::User => "Ти".green().bold(),
                Role::Assistant => "BGGovAI".cyan().bold(),
            };
            output.push_str(&format!("{}\n{}\n\n", label, Self::indent(&message.content, "  ")));
        }
        output
    }

    fn card(title: &str, body: &str) -> String {
        format!("{}{}\n", Self::section_header(title), Self::indent(body, "  "))
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_turn(&self, turn: &AdvisorTurn, display: &DisplayOptions) -> String {
        Self::format_turn(turn, display)
    }

    fn format_json(&self, turn: &AdvisorTurn) -> String {
        Self::format_json(turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bggovai_domain::{
        AnswerOutcome, AssistantReply, Model, Topic, make_title, needs_clarification, route,
    };

    fn turn(question: &str, answer: &str, topic: Topic) -> AdvisorTurn {
        let clarification = needs_clarification(question, topic);
        let institutions = route(question);
        let outcome = AnswerOutcome::Answered(answer.to_string());
        AdvisorTurn {
            question: question.to_string(),
            title: make_title(question),
            topic,
            clarification,
            debug: TurnDebug {
                topic,
                followup: clarification,
                model: Model::default(),
                sources_count: institutions.len(),
                cached: false,
            },
            reply: AssistantReply::split(&outcome.text()),
            institutions,
            outcome,
        }
    }

    #[test]
    fn test_format_turn_cards() {
        let turn = turn(
            "Искам да сменя управител на ЕООД",
            "Кратко резюме.\n\nСтъпка 1\nСтъпка 2",
            Topic::CommercialRegistry,
        );
        let output = ConsoleFormatter::format_turn(&turn, &DisplayOptions::default());

        assert!(output.contains("Резюме"));
        assert!(output.contains("Кратко резюме."));
        assert!(output.contains("Подробности"));
        assert!(output.contains("  Стъпка 2"));
        assert!(output.contains("За да продължа точно"));
        assert!(output.contains("👉"));
        assert!(output.contains("Официални държавни институции"));
        assert!(output.contains("https://portal.registryagency.bg/"));
        assert!(!output.contains("Технически детайли"));
    }

    #[test]
    fn test_format_turn_respects_display_options() {
        let turn = turn("Болничен лист", "Само резюме", Topic::SocialInsurance);
        let display = DisplayOptions {
            show_sources: false,
            show_debug: true,
        };
        let output = ConsoleFormatter::format_turn(&turn, &display);

        assert!(!output.contains("Подробности"));
        assert!(!output.contains("За да продължа точно"));
        assert!(!output.contains("Официални държавни институции"));
        assert!(output.contains("Технически детайли"));
        assert!(output.contains("NOI"));
        assert!(output.contains("sources_count: 3"));
    }

    #[test]
    fn test_format_json() {
        let turn = turn("Как да платя данък?", "ok", Topic::TaxAuthority);
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&turn)).unwrap();

        assert_eq!(json["topic"], "NAP");
        assert_eq!(json["outcome"]["status"], "answered");
        let institutions = json["institutions"].as_array().unwrap();
        assert!(institutions.iter().any(|i| i["name"] == "НАП"));
    }

    #[test]
    fn test_format_history_newest_first() {
        let mut session = AdvisorSession::new();
        session.record_question("Данък върху доходите");
        session.record_question("Загубих книжката си");

        let output = ConsoleFormatter::format_history(&session, 8);
        let kat = output.find("Загубих").unwrap();
        let nap = output.find("Данък").unwrap();
        assert!(output.contains("История (сесия)"));
        assert!(kat < nap);
    }

    #[test]
    fn test_format_transcript_labels() {
        let mut session = AdvisorSession::new();
        session.record_question("Здравей");
        session.record_answer("Здравейте!");

        let output = ConsoleFormatter::format_transcript(&session, 20);
        assert!(output.contains("Ти"));
        assert!(output.contains("BGGovAI"));
        assert!(output.find("Здравей\n").unwrap() < output.find("Здравейте!").unwrap());
    }

    #[test]
    fn test_empty_session_views() {
        let session = AdvisorSession::new();
        assert!(ConsoleFormatter::format_history(&session, 8).contains("Няма въпроси"));
        assert!(ConsoleFormatter::format_transcript(&session, 20).contains("Няма съобщения"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
