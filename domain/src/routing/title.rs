//! History title summarizer
//!
//! Only used to label history entries. Its vocabulary resembles the topic
//! classifier's but is evaluated on its own, so a question can be titled
//! differently from how it is classified.

use super::rule::{KeywordRule, first_match};

pub const GENERAL_TITLE: &str = "ℹ️ Общ въпрос";

pub const RULES: &[KeywordRule<&str>] = &[
    KeywordRule::new(
        &["кат", "книжк", "точк", "пътна полиция", "фиш", "акт", "глоб", "регистрац", "талон", "птп"],
        "🚗 КАТ / Пътна полиция",
    ),
    KeywordRule::new(
        &["нап", "данък", "данъци", "декларац", "ревиз", "задължен", "осигуровк"],
        "💼 НАП",
    ),
    KeywordRule::new(
        &["нои", "пенси", "болнич", "обезщет", "осигурител", "стаж", "майчин"],
        "👥 НОИ",
    ),
    KeywordRule::new(
        &[
            "еоод",
            "оод",
            "мол",
            "управител",
            "а4",
            "търговски регист",
            "вписван",
            "агенция по вписвания",
        ],
        "🧾 Търговски регистър",
    ),
    KeywordRule::new(
        &[
            "закон",
            "чл",
            "ал.",
            "проектозакон",
            "държавен вестник",
            "обнарод",
            "наредб",
            "правилник",
        ],
        "⚖️ Закони",
    ),
];

/// Short emoji-tagged label for the session history.
pub fn make_title(question: &str) -> &'static str {
    first_match(RULES, question).unwrap_or(GENERAL_TITLE)
}
