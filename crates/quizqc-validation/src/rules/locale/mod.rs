//! Locale and orthography checks. Every finding here is a Warning.
//!
//! Each check is its own rule so the registry can scope it to one
//! language; all of them report under `RuleId::Locale`.

pub mod tables;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use quizqc_core::models::{Finding, Language, QuestionRecord, RuleId};
use quizqc_core::traits::{KnowledgeSource, QcRule};
use regex::Regex;

use self::tables::{
    british_spelling, RE_AMERICAN_SPELLING, RE_CONTINENTAL_NUMERAL, RE_SHARP_S, RE_SPELLING_GUARD,
};

pub const AMERICAN_SPELLING: &str = "LOCALE_AMERICAN_SPELLING";
pub const CONTINENTAL_NUMERAL: &str = "LOCALE_CONTINENTAL_NUMERAL";
pub const SHARP_S: &str = "LOCALE_SHARP_S";

/// Region subtag for Swiss conventions.
const SWISS_REGION: &str = "CH";

/// `(field, text)` pairs a locale check reads: the prompt, then each option.
fn text_fields(record: &QuestionRecord) -> impl Iterator<Item = (String, &str)> {
    std::iter::once(("prompt".to_string(), record.prompt_text.as_str())).chain(
        record
            .options
            .iter()
            .enumerate()
            .map(|(i, o)| (format!("options[{i}]"), o.as_str())),
    )
}

/// One warning per distinct (lower-cased) match per field.
fn scan(
    record: &QuestionRecord,
    pattern: &LazyLock<Option<Regex>>,
    code: &str,
    message: impl Fn(&str) -> String,
) -> Vec<Finding> {
    let Some(re) = pattern.as_ref() else {
        return Vec::new();
    };
    let mut findings = Vec::new();
    for (field, text) in text_fields(record) {
        let terms: BTreeSet<String> = re
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect();
        for term in terms {
            findings.push(
                Finding::warning(RuleId::Locale, code, message(&term)).with_field(field.clone()),
            );
        }
    }
    findings
}

/// British English expected: flags American spellings unless the prompt is
/// itself a spelling exercise.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishSpellingRule;

impl QcRule for EnglishSpellingRule {
    fn id(&self) -> RuleId {
        RuleId::Locale
    }

    fn description(&self) -> &'static str {
        "American spellings in English content"
    }

    fn evaluate(&self, record: &QuestionRecord, _knowledge: &dyn KnowledgeSource) -> Vec<Finding> {
        if record.locale.language != Language::English {
            return Vec::new();
        }
        let guarded = RE_SPELLING_GUARD
            .as_ref()
            .is_some_and(|re| re.is_match(&record.prompt_text));
        if guarded {
            return Vec::new();
        }
        scan(record, &RE_AMERICAN_SPELLING, AMERICAN_SPELLING, |term| {
            match british_spelling(term) {
                Some(british) => format!("American spelling {term:?}; use {british:?}"),
                None => format!("Possible American spelling: {term:?}"),
            }
        })
    }
}

/// Swiss French uses septante/huitante/nonante.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwissFrenchNumeralRule;

impl QcRule for SwissFrenchNumeralRule {
    fn id(&self) -> RuleId {
        RuleId::Locale
    }

    fn description(&self) -> &'static str {
        "Continental French numerals in fr-CH content"
    }

    fn evaluate(&self, record: &QuestionRecord, _knowledge: &dyn KnowledgeSource) -> Vec<Finding> {
        if !record.locale.is(Language::French, SWISS_REGION) {
            return Vec::new();
        }
        scan(record, &RE_CONTINENTAL_NUMERAL, CONTINENTAL_NUMERAL, |term| {
            format!("Continental French numeral {term:?}; use septante, huitante, nonante")
        })
    }
}

/// Swiss German writes `ss`, never `ß`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwissGermanSharpSRule;

impl QcRule for SwissGermanSharpSRule {
    fn id(&self) -> RuleId {
        RuleId::Locale
    }

    fn description(&self) -> &'static str {
        "Sharp s in de-CH content"
    }

    fn evaluate(&self, record: &QuestionRecord, _knowledge: &dyn KnowledgeSource) -> Vec<Finding> {
        if !record.locale.is(Language::German, SWISS_REGION) {
            return Vec::new();
        }
        scan(record, &RE_SHARP_S, SHARP_S, |term| {
            format!("Swiss German uses \"ss\" not \"ß\": {term:?}; use {:?}", term.replace('ß', "ss"))
        })
    }
}
