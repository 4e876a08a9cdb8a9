//! Topic classifier

use super::rule::{KeywordRule, first_match};
use serde::{Deserialize, Serialize};

/// The area of central administration a question belongs to.
///
/// Exactly one topic per question; [`Topic::General`] is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    /// КАТ / Пътна полиция
    #[serde(rename = "KAT")]
    RoadPolice,
    /// НАП
    #[serde(rename = "NAP")]
    TaxAuthority,
    /// НОИ
    #[serde(rename = "NOI")]
    SocialInsurance,
    /// Търговски регистър (manager / МОЛ changes)
    #[serde(rename = "ADMIN_MOL")]
    CommercialRegistry,
    /// Laws, ordinances, State Gazette
    #[serde(rename = "LEGAL")]
    Legal,
    /// Имотен регистър. No classifier rule selects this yet.
    #[serde(rename = "PROPERTY")]
    PropertyRegistry,
    /// Roads, vignettes and tolls. No classifier rule selects this yet.
    #[serde(rename = "ROAD_INFRA")]
    RoadInfrastructure,
    /// Road transport licensing. No classifier rule selects this yet.
    #[serde(rename = "TRANSPORT")]
    TransportLicensing,
    #[serde(rename = "GENERAL")]
    General,
}

impl Topic {
    /// Stable code placed in the model context and the debug payload.
    pub fn code(&self) -> &'static str {
        match self {
            Topic::RoadPolice => "KAT",
            Topic::TaxAuthority => "NAP",
            Topic::SocialInsurance => "NOI",
            Topic::CommercialRegistry => "ADMIN_MOL",
            Topic::Legal => "LEGAL",
            Topic::PropertyRegistry => "PROPERTY",
            Topic::RoadInfrastructure => "ROAD_INFRA",
            Topic::TransportLicensing => "TRANSPORT",
            Topic::General => "GENERAL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Topic::RoadPolice => "КАТ / Пътна полиция",
            Topic::TaxAuthority => "НАП",
            Topic::SocialInsurance => "НОИ",
            Topic::CommercialRegistry => "Търговски регистър",
            Topic::Legal => "Закони и нормативни актове",
            Topic::PropertyRegistry => "Имотен регистър",
            Topic::RoadInfrastructure => "Пътна инфраструктура",
            Topic::TransportLicensing => "Автомобилна администрация",
            Topic::General => "Общ въпрос",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Classifier table. Commercial-registry and legal come before the narrower
/// topics. The router's property, road and transport vocabulary is not used
/// here: its short stems ("апи", "тол") match inside unrelated words.
pub const RULES: &[KeywordRule<Topic>] = &[
    KeywordRule::new(
        &["еоод", "оод", "мол", "управител", "а4", "търговски регист", "агенция по вписвания"],
        Topic::CommercialRegistry,
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
            "гражданств",
        ],
        Topic::Legal,
    ),
    KeywordRule::new(
        &["кат", "пътна полиция", "книжк", "точк", "фиш", "акт", "глоб", "регистрац", "птп"],
        Topic::RoadPolice,
    ),
    KeywordRule::new(
        &["нап", "данък", "данъци", "декларац", "осигуровк", "ревиз", "задължен"],
        Topic::TaxAuthority,
    ),
    KeywordRule::new(
        &["нои", "пенси", "болнич", "обезщет", "осигурител", "стаж", "майчин"],
        Topic::SocialInsurance,
    ),
];

/// Classify a question. Total: anything unmatched is [`Topic::General`].
pub fn classify(question: &str) -> Topic {
    first_match(RULES, question).unwrap_or(Topic::General)
}
