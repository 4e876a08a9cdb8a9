//! Institution directory and router

use super::rule::{KeywordRule, first_match};
use serde::Serialize;

/// A central-government institution with its canonical display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Institution {
    pub name: &'static str,
    pub url: &'static str,
}

impl Institution {
    const fn new(name: &'static str, url: &'static str) -> Self {
        Self { name, url }
    }
}

const COUNCIL_OF_MINISTERS: &str = "Министерски съвет";
const PARLIAMENT: &str = "Народно събрание";
const STATE_GAZETTE: &str = "Държавен вестник";
const EGOV: &str = "Електронно управление (eGov)";
const INTERIOR: &str = "Министерство на вътрешните работи (МВР)";
const ROAD_POLICE: &str = "КАТ / Пътна полиция (МВР)";
const NRA: &str = "НАП";
const NSSI: &str = "НОИ";
const FINANCE: &str = "Министерство на финансите";
const JUSTICE: &str = "Министерство на правосъдието";
const COMMERCIAL_REGISTER: &str = "Агенция по вписванията / Търговски регистър";
const PROPERTY_REGISTER: &str = "Агенция по вписванията / Имотен регистър";
const LABOUR: &str = "Министерство на труда и социалната политика";
const REGIONAL: &str = "Министерство на регионалното развитие и благоустройството";
const TRANSPORT: &str = "Министерство на транспорта и съобщенията";
const ROAD_AGENCY: &str = "Агенция „Пътна инфраструктура“ (АПИ)";
const ROAD_ADMINISTRATION: &str = "ИА „Автомобилна администрация“";

/// The fixed institution catalogue, in display order.
pub const DIRECTORY: &[Institution] = &[
    Institution::new(COUNCIL_OF_MINISTERS, "https://www.gov.bg/"),
    Institution::new(PARLIAMENT, "https://www.parliament.bg/"),
    Institution::new(STATE_GAZETTE, "https://dv.parliament.bg/"),
    Institution::new("Министерство на електронното управление", "https://www.megov.bg/"),
    Institution::new(EGOV, "https://egov.bg/"),
    Institution::new(INTERIOR, "https://www.mvr.bg/"),
    Institution::new(ROAD_POLICE, "https://www.mvr.bg/"),
    Institution::new(NRA, "https://nra.bg/"),
    Institution::new(NSSI, "https://www.nssi.bg/"),
    Institution::new(FINANCE, "https://www.minfin.bg/"),
    Institution::new("Българска народна банка", "https://www.bnb.bg/"),
    Institution::new("Национален статистически институт", "https://www.nsi.bg/"),
    Institution::new(JUSTICE, "https://www.justice.government.bg/"),
    Institution::new(COMMERCIAL_REGISTER, "https://portal.registryagency.bg/"),
    Institution::new(PROPERTY_REGISTER, "https://portal.registryagency.bg/"),
    Institution::new(LABOUR, "https://www.mlsp.government.bg/"),
    Institution::new(REGIONAL, "https://www.mrrb.bg/"),
    Institution::new(TRANSPORT, "https://www.mtc.government.bg/"),
    Institution::new(ROAD_AGENCY, "https://www.api.bg/"),
    Institution::new(ROAD_ADMINISTRATION, "https://rta.government.bg/"),
    Institution::new("Министерство на здравеопазването", "https://www.mh.government.bg/"),
    Institution::new("Министерство на образованието и науката", "https://www.mon.bg/"),
    Institution::new(
        "Министерство на околната среда и водите",
        "https://www.moew.government.bg/",
    ),
    Institution::new("Министерство на земеделието", "https://www.mzh.government.bg/"),
    Institution::new("Министерство на икономиката и индустрията", "https://www.mee.government.bg/"),
    Institution::new("Сметна палата", "https://www.bulnao.government.bg/"),
];

type Selection = &'static [&'static str];

/// Router table: each rule selects a subset of [`DIRECTORY`] by name.
pub const RULES: &[KeywordRule<Selection>] = &[
    KeywordRule::new(
        &[
            "кат",
            "пътна полиция",
            "шофьор",
            "книжк",
            "контролни точки",
            "фиш",
            "акт",
            "глоб",
            "регистрац",
            "талон",
            "птп",
        ],
        &[INTERIOR, ROAD_POLICE, EGOV],
    ),
    KeywordRule::new(
        &["нап", "данък", "данъци", "деклара", "осигуровк", "ревиз", "задължен"],
        &[NRA, FINANCE, EGOV],
    ),
    KeywordRule::new(
        &["нои", "пенси", "болнич", "обезщет", "осигурител", "стаж", "майчин"],
        &[NSSI, LABOUR, EGOV],
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
        &[COMMERCIAL_REGISTER, JUSTICE, EGOV],
    ),
    KeywordRule::new(
        &["имот", "възбра", "ипотек", "нотари", "имотен регист", "вписван"],
        &[PROPERTY_REGISTER, JUSTICE, EGOV],
    ),
    KeywordRule::new(
        &["път", "винет", "тол", "апи", "магистра", "пътна инфраструктура"],
        &[ROAD_AGENCY, REGIONAL, TRANSPORT],
    ),
    KeywordRule::new(
        &["автомобилна администрация", "лиценз", "превоз", "такси", "камион", "автобус"],
        &[ROAD_ADMINISTRATION, TRANSPORT],
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
        &[PARLIAMENT, STATE_GAZETTE, JUSTICE],
    ),
];

/// General-purpose institutions for questions no rule recognises.
pub const FALLBACK: Selection = &[COUNCIL_OF_MINISTERS, EGOV, PARLIAMENT, STATE_GAZETTE];

/// Route a question to the relevant institutions.
///
/// The result keeps [`DIRECTORY`] order and is never empty.
pub fn route(question: &str) -> Vec<&'static Institution> {
    let names = first_match(RULES, question).unwrap_or(FALLBACK);
    pick(names)
}

fn pick(names: Selection) -> Vec<&'static Institution> {
    DIRECTORY
        .iter()
        .filter(|institution| names.contains(&institution.name))
        .collect()
}
