//! Recognized factual question phrasings. Each captures the entity name in
//! the `entity` group; text matching none of them is never judged.

use std::sync::LazyLock;

use quizqc_core::models::Language;
use regex::Regex;

/// One phrasing of a fact question in one language.
pub struct Template {
    pub language: Language,
    /// Relation half of the topic key (`capital`, `highest_peak`, ...).
    pub relation: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! template_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// Entity runs to the end of the clause.
const ENTITY: &str = r"(?P<entity>[^?.,!;:]+)";

macro_rules! clause_template {
    ($name:ident, $prefix:expr) => {
        static $name: LazyLock<Option<Regex>> =
            LazyLock::new(|| Regex::new(&format!("(?i){}{}", $prefix, ENTITY)).ok());
    };
}

// ── capital ───────────────────────────────────────────────────────────────
clause_template!(RE_EN_CAPITAL, r"\bcapital\s+(?:city\s+)?of\s+");
clause_template!(RE_DE_CAPITAL, r"\bhauptstadt\s+(?:von\s+)?");
clause_template!(RE_FR_CAPITAL, r"\bcapitale\s+(?:de\s+|du\s+|des\s+|d')");

// ── highest peak ──────────────────────────────────────────────────────────
clause_template!(RE_EN_HIGHEST_PEAK, r"\bhighest\s+(?:peak|mountain)\s+(?:in|of)\s+");
clause_template!(
    RE_DE_HIGHEST_PEAK,
    r"\bhöchste[nrs]?\s+(?:berg|gipfel)\s+(?:von\s+|in\s+|im\s+)?"
);
clause_template!(
    RE_FR_HIGHEST_PEAK,
    r"\bplus\s+haute?\s+(?:sommet|montagne|mont)\s+(?:de\s+|du\s+|d')"
);

// ── largest lake ──────────────────────────────────────────────────────────
clause_template!(RE_EN_LARGEST_LAKE, r"\b(?:largest|biggest)\s+lake\s+(?:in|of)\s+");
clause_template!(
    RE_DE_LARGEST_LAKE,
    r"\bgr(?:ö|oe)(?:ss|ß)te[nrs]?\s+see\s+(?:von\s+|in\s+|im\s+)?"
);
clause_template!(RE_FR_LARGEST_LAKE, r"\bplus\s+grand\s+lac\s+(?:de\s+|du\s+|d')");

// ── longest river ─────────────────────────────────────────────────────────
clause_template!(RE_EN_LONGEST_RIVER, r"\blongest\s+river\s+(?:in|of)\s+");
clause_template!(
    RE_DE_LONGEST_RIVER,
    r"\bl(?:ä|ae)ngste[nrs]?\s+fluss\s+(?:von\s+|in\s+|im\s+)?"
);
clause_template!(
    RE_FR_LONGEST_RIVER,
    r"\bplus\s+(?:long\s+fleuve|longue\s+rivière)\s+(?:de\s+|du\s+|d')"
);

// ── counts ("how many Z") ─────────────────────────────────────────────────
template_pattern!(RE_EN_COUNT, r"(?i)\bhow\s+many\s+(?P<entity>\w+)");
template_pattern!(RE_DE_COUNT, r"(?i)\bwie\s+viele\s+(?P<entity>\w+)");
template_pattern!(
    RE_FR_COUNT,
    r"(?i)\bcombien\s+(?:y\s+a-t-il\s+)?(?:de\s+|d')(?P<entity>\w+)"
);

static TEMPLATES: &[Template] = &[
    Template { language: Language::English, relation: "capital", regex: &RE_EN_CAPITAL },
    Template { language: Language::German, relation: "capital", regex: &RE_DE_CAPITAL },
    Template { language: Language::French, relation: "capital", regex: &RE_FR_CAPITAL },
    Template { language: Language::English, relation: "highest_peak", regex: &RE_EN_HIGHEST_PEAK },
    Template { language: Language::German, relation: "highest_peak", regex: &RE_DE_HIGHEST_PEAK },
    Template { language: Language::French, relation: "highest_peak", regex: &RE_FR_HIGHEST_PEAK },
    Template { language: Language::English, relation: "largest_lake", regex: &RE_EN_LARGEST_LAKE },
    Template { language: Language::German, relation: "largest_lake", regex: &RE_DE_LARGEST_LAKE },
    Template { language: Language::French, relation: "largest_lake", regex: &RE_FR_LARGEST_LAKE },
    Template { language: Language::English, relation: "longest_river", regex: &RE_EN_LONGEST_RIVER },
    Template { language: Language::German, relation: "longest_river", regex: &RE_DE_LONGEST_RIVER },
    Template { language: Language::French, relation: "longest_river", regex: &RE_FR_LONGEST_RIVER },
    Template { language: Language::English, relation: "count", regex: &RE_EN_COUNT },
    Template { language: Language::German, relation: "count", regex: &RE_DE_COUNT },
    Template { language: Language::French, relation: "count", regex: &RE_FR_COUNT },
];

/// A template hit: relation plus the raw entity text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMatch<'t> {
    pub relation: &'static str,
    pub entity: &'t str,
}

/// Every template of `language` that matches `text`, in table order.
pub fn matches<'t>(language: Language, text: &'t str) -> Vec<TemplateMatch<'t>> {
    TEMPLATES
        .iter()
        .filter(|t| t.language == language)
        .filter_map(|t| {
            let caps = t.regex.as_ref()?.captures(text)?;
            let entity = caps.name("entity")?.as_str().trim();
            (!entity.is_empty()).then_some(TemplateMatch {
                relation: t.relation,
                entity,
            })
        })
        .collect()
}
