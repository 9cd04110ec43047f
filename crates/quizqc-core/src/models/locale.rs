use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;

/// Supported content languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "de")]
    German,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::German => "de",
            Self::English => "en",
            Self::French => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "de" => Some(Self::German),
            "en" => Some(Self::English),
            "fr" => Some(Self::French),
            _ => None,
        }
    }

    /// The two canonical true/false tokens, `(true, false)`.
    pub fn true_false_tokens(&self) -> (&'static str, &'static str) {
        match self {
            Self::German => ("Wahr", "Falsch"),
            Self::English => ("True", "False"),
            Self::French => ("Vrai", "Faux"),
        }
    }

    /// Parse an exact canonical token. Synonyms ("Richtig", "yes") are not accepted.
    pub fn parse_true_false(&self, token: &str) -> Option<bool> {
        let (t, f) = self.true_false_tokens();
        match token.trim() {
            s if s == t => Some(true),
            s if s == f => Some(false),
            _ => None,
        }
    }

    pub fn true_false_token(&self, value: bool) -> &'static str {
        let (t, f) = self.true_false_tokens();
        if value {
            t
        } else {
            f
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A language tag with an optional region, e.g. `de-CH`, `en-GB`, `fr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    pub language: Language,
    /// Upper-case region subtag (`CH`, `GB`), if the tag carried one.
    pub region: Option<String>,
}

impl Locale {
    pub fn new(language: Language, region: Option<&str>) -> Self {
        Self {
            language,
            region: region.map(|r| r.to_ascii_uppercase()),
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// True when the locale is `<language>-<region>` (region compared case-insensitively).
    pub fn is(&self, language: Language, region: &str) -> bool {
        self.language == language
            && self
                .region
                .as_deref()
                .is_some_and(|r| r.eq_ignore_ascii_case(region))
    }
}

impl FromStr for Locale {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SchemaError::InvalidLocale {
            value: s.to_string(),
        };
        let mut parts = s.trim().split(['-', '_']);
        let language = parts
            .next()
            .and_then(Language::from_code)
            .ok_or_else(invalid)?;
        let region = match parts.next() {
            Some(r) if r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()) => Some(r),
            Some(_) => return Err(invalid()),
            None => None,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(language, region))
    }
}

impl TryFrom<String> for Locale {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language.code(), region),
            None => f.write_str(self.language.code()),
        }
    }
}
