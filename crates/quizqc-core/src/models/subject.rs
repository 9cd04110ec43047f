use std::fmt;

use serde::{Deserialize, Serialize};

/// Topic domain of a question. Selects which rules and knowledge partitions apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Subject {
    Math,
    Geography,
    Science,
    History,
    LanguageArts,
    Other(String),
}

impl Subject {
    /// Parse a subject name. Accepts the legacy names used by the question
    /// database (`german`, `english`, `french` are language lessons, `nmg`
    /// is the Swiss nature/society subject).
    pub fn parse(name: &str) -> Self {
        let lower = name.trim().to_lowercase();
        match lower.as_str() {
            "math" | "maths" | "mathematics" | "mathematik" => Self::Math,
            "geography" | "geographie" | "géographie" => Self::Geography,
            "science" | "nmg" => Self::Science,
            "history" | "geschichte" | "histoire" => Self::History,
            "language-arts" | "language" | "german" | "english" | "french" => {
                Self::LanguageArts
            }
            _ => Self::Other(lower),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Math => "math",
            Self::Geography => "geography",
            Self::Science => "science",
            Self::History => "history",
            Self::LanguageArts => "language-arts",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Subject {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.as_str().to_string()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
