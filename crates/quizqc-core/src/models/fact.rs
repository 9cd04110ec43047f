use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::NUMERIC_TOLERANCE;

use super::locale::Language;

/// Key of a verified fact: a relation applied to an entity, e.g.
/// `capital:switzerland` or `count:continents`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TopicKey {
    pub relation: String,
    pub entity: String,
}

impl TopicKey {
    pub fn new(relation: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            relation: relation.into().to_ascii_lowercase(),
            entity: entity.into().to_ascii_lowercase(),
        }
    }
}

impl TryFrom<String> for TopicKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.split_once(':') {
            Some((relation, entity)) if !relation.is_empty() && !entity.is_empty() => {
                Ok(Self::new(relation.trim(), entity.trim()))
            }
            _ => Err(format!("topic key must look like relation:entity, got {value:?}")),
        }
    }
}

impl From<TopicKey> for String {
    fn from(key: TopicKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.relation, self.entity)
    }
}

/// A verified fact: canonical value plus the surface forms accepted as equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactEntry {
    pub value: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl FactEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            synonyms: Vec::new(),
            unit: None,
        }
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms.extend(synonyms.into_iter().map(Into::into));
        self
    }

    /// Whether `answer` names this fact, tolerating case, spacing, trailing
    /// punctuation, a trailing unit, and numeric formatting.
    pub fn accepts(&self, answer: &str) -> bool {
        let folded = self.strip_unit(&fold_text(answer));
        if folded.is_empty() {
            return false;
        }
        let numeric_answer = parse_plain_number(&folded);
        std::iter::once(&self.value)
            .chain(self.synonyms.iter())
            .any(|form| {
                let form = fold_text(form);
                if form == folded {
                    return true;
                }
                match (numeric_answer, parse_plain_number(&form)) {
                    (Some(a), Some(b)) => (a - b).abs() < NUMERIC_TOLERANCE,
                    _ => false,
                }
            })
    }

    fn strip_unit(&self, folded: &str) -> String {
        if let Some(unit) = &self.unit {
            let unit = fold_text(unit);
            if let Some(rest) = folded.strip_suffix(unit.as_str()) {
                return rest.trim_end().to_string();
            }
        }
        folded.to_string()
    }
}

/// Lower-case, collapse internal whitespace, unify apostrophes, and drop
/// surrounding quotes and trailing sentence punctuation.
pub fn fold_text(text: &str) -> String {
    let lowered = text.to_lowercase().replace(['’', '`'], "'");
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    let is_quote = |c: char| matches!(c, '"' | '«' | '»' | '“' | '”');
    collapsed
        .trim_start_matches(|c: char| is_quote(c) || c.is_whitespace())
        .trim_end_matches(|c: char| {
            is_quote(c) || c.is_whitespace() || matches!(c, '.' | '!' | '?' | ';' | ':')
        })
        .to_string()
}

/// Parse a whole string as a number, accepting Swiss thousands separators
/// (`1'000`) and a decimal comma.
pub fn parse_plain_number(text: &str) -> Option<f64> {
    parse_with(text, false)
}

/// Parse a whole string as a number written the way `language` writes
/// numbers. Apostrophes and spaces group thousands in every language. In
/// English a comma followed by exactly three digits groups thousands
/// (`1,000`); any other comma is a decimal comma.
pub fn parse_number(text: &str, language: Language) -> Option<f64> {
    parse_with(text, language == Language::English)
}

fn parse_with(text: &str, comma_groups: bool) -> Option<f64> {
    let chars: Vec<char> = text.trim().chars().collect();
    let mut cleaned = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        match c {
            '\'' | '’' | ' ' | '\u{a0}' | '\u{202f}' => {}
            ',' if comma_groups && is_thousands_group(&chars[i + 1..]) => {}
            ',' => cleaned.push('.'),
            c => cleaned.push(c),
        }
    }
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn is_thousands_group(rest: &[char]) -> bool {
    rest.len() >= 3
        && rest[..3].iter().all(char::is_ascii_digit)
        && !rest.get(3).is_some_and(char::is_ascii_digit)
}
