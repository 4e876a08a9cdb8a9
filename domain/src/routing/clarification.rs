//! Clarification selector
//!
//! Decides whether a question needs one follow-up before a precise answer
//! is possible. At most one clarification per question; the rules never
//! combine.

use super::rule::{contains_any, normalize};
use super::topic::Topic;
use regex::Regex;
use std::sync::LazyLock;

pub const COMMERCIAL_REGISTRY_FOLLOW_UP: &str = "Имаш ли КЕП за електронно подаване и сменяш ли само управител (МОЛ), или и други обстоятелства (адрес, предмет, капитал)?";

pub const LEGAL_FOLLOW_UP: &str = "Имаш ли конкретния текст (чл./ал./§) или линк към проекта/Държавен вестник? Ако да – прати го, за да дам точен анализ.";

pub const CITATION_FOLLOW_UP: &str = "Става ли дума за фиш или акт, и имаш ли дата/номер? (за да дам точните стъпки за проверка/обжалване)";

pub const LICENCE_FOLLOW_UP: &str =
    "Става дума за подмяна, изгубена/открадната книжка, или първо издаване?";

pub const DECLARATION_FOLLOW_UP: &str =
    "Коя декларация имаш предвид (напр. ГДД, ДДС, осигуровки), и физическо лице ли е или фирма?";

pub const PENSION_FOLLOW_UP: &str =
    "За какъв вид пенсия става дума (възраст/стаж, инвалидна, наследствена и т.н.)?";

const CITATION_KEYWORDS: &[&str] = &["глоб", "фиш", "акт"];
const LICENCE_KEYWORDS: &[&str] = &["книжк", "свидетелств"];
const LICENCE_SCENARIOS: &[&str] = &["подмяна", "изгуб", "загуб", "открад", "изтич", "нов"];
const DECLARATION_TYPES: &[&str] = &["гдд", "чл. 50", "ддс", "осигур", "6", "1", "55"];
const PENSION_TYPES: &[&str] = &["възраст", "стаж", "инвалид", "наслед", "учител", "ранно"];

/// A series, number or date already mentioned as a standalone word.
static CITATION_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(серия|номер|дата)\b").expect("static pattern"));

/// Pick the follow-up question for `question` under `topic`, if any.
pub fn needs_clarification(question: &str, topic: Topic) -> Option<&'static str> {
    let t = normalize(question);

    match topic {
        Topic::CommercialRegistry => Some(COMMERCIAL_REGISTRY_FOLLOW_UP),
        Topic::Legal => Some(LEGAL_FOLLOW_UP),
        Topic::RoadPolice => {
            if contains_any(&t, CITATION_KEYWORDS) && !CITATION_REFERENCE.is_match(&t) {
                Some(CITATION_FOLLOW_UP)
            } else if contains_any(&t, LICENCE_KEYWORDS) && !contains_any(&t, LICENCE_SCENARIOS) {
                Some(LICENCE_FOLLOW_UP)
            } else {
                None
            }
        }
        Topic::TaxAuthority => (t.contains("декларац") && !contains_any(&t, DECLARATION_TYPES))
            .then_some(DECLARATION_FOLLOW_UP),
        Topic::SocialInsurance => {
            (t.contains("пенси") && !contains_any(&t, PENSION_TYPES)).then_some(PENSION_FOLLOW_UP)
        }
        Topic::PropertyRegistry
        | Topic::RoadInfrastructure
        | Topic::TransportLicensing
        | Topic::General => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{classify, route};

    #[test]
    fn test_commercial_registry_is_unconditional() {
        for q in ["", "Искам да сменя управител на ЕООД", "нещо съвсем друго"] {
            let follow = needs_clarification(q, Topic::CommercialRegistry);
            assert_eq!(follow, Some(COMMERCIAL_REGISTRY_FOLLOW_UP));
        }
    }

    #[test]
    fn test_legal_is_unconditional() {
        assert_eq!(
            needs_clarification("чл. 12, ал. 3", Topic::Legal),
            Some(LEGAL_FOLLOW_UP)
        );
    }

    #[test]
    fn test_citation_without_reference() {
        assert_eq!(
            needs_clarification("Получих глоба от КАТ", Topic::RoadPolice),
            Some(CITATION_FOLLOW_UP)
        );
    }

    #[test]
    fn test_citation_with_reference() {
        assert_eq!(
            needs_clarification("Имам фиш с номер 123", Topic::RoadPolice),
            None
        );
        assert_eq!(
            needs_clarification("Акт, дата 12.03", Topic::RoadPolice),
            None
        );
    }

    #[test]
    fn test_reference_must_be_a_whole_word() {
        // "номера" is not the standalone word "номер"
        assert_eq!(
            needs_clarification("Глоба, не помня номера", Topic::RoadPolice),
            Some(CITATION_FOLLOW_UP)
        );
    }

    #[test]
    fn test_licence_scenarios() {
        assert_eq!(
            needs_clarification("Какво правя с книжката?", Topic::RoadPolice),
            Some(LICENCE_FOLLOW_UP)
        );
        assert_eq!(needs_clarification("Загубих книжката си", Topic::RoadPolice), None);
        assert_eq!(
            needs_clarification("Подмяна на свидетелство", Topic::RoadPolice),
            None
        );
    }

    #[test]
    fn test_road_police_without_triggers() {
        assert_eq!(
            needs_clarification("Колко точки имам?", Topic::RoadPolice),
            None
        );
    }

    #[test]
    fn test_declaration_type_missing() {
        assert_eq!(
            needs_clarification("Трябва ли да подам декларация?", Topic::TaxAuthority),
            Some(DECLARATION_FOLLOW_UP)
        );
    }

    #[test]
    fn test_declaration_type_named() {
        assert_eq!(
            needs_clarification("Декларация по ДДС", Topic::TaxAuthority),
            None
        );
        assert_eq!(
            needs_clarification("Декларация образец 1", Topic::TaxAuthority),
            None
        );
        assert_eq!(needs_clarification("Как да платя данък?", Topic::TaxAuthority), None);
    }

    #[test]
    fn test_pension_subtype() {
        assert_eq!(
            needs_clarification("Как да получа пенсия?", Topic::SocialInsurance),
            Some(PENSION_FOLLOW_UP)
        );
        assert_eq!(
            needs_clarification("Наследствена пенсия", Topic::SocialInsurance),
            None
        );
        assert_eq!(needs_clarification("Болничен лист", Topic::SocialInsurance), None);
    }

    #[test]
    fn test_other_topics_never_ask() {
        for topic in [
            Topic::PropertyRegistry,
            Topic::RoadInfrastructure,
            Topic::TransportLicensing,
            Topic::General,
        ] {
            assert_eq!(needs_clarification("декларация пенсия книжка глоба", topic), None);
        }
    }

    #[test]
    fn test_lost_licence_scenario_end_to_end() {
        let q = "Загубих книжката си";
        let topic = classify(q);
        assert_eq!(topic, Topic::RoadPolice);
        assert_eq!(needs_clarification(q, topic), None);
    }

    #[test]
    fn test_empty_question_end_to_end() {
        let topic = classify("");
        assert_eq!(topic, Topic::General);
        assert_eq!(needs_clarification("", topic), None);

        let names: Vec<_> = route("").iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            vec![
                "Министерски съвет",
                "Народно събрание",
                "Държавен вестник",
                "Електронно управление (eGov)",
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let q = "Имам акт";
        assert_eq!(
            needs_clarification(q, Topic::RoadPolice),
            needs_clarification(q, Topic::RoadPolice)
        );
    }
}
