use serde::{Deserialize, Serialize};

/// A question as it arrives from an importer or the question store, before
/// normalization. Every field is optional so that missing data surfaces as
/// a `SchemaError` rather than a deserialization failure.
///
/// Accepts both the engine's camelCase names and the store's column names
/// (`question`, `answers`, `type`, `grade`, `language`, `correct_answer`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawQuestion {
    pub id: Option<String>,
    #[serde(alias = "type")]
    pub kind: Option<String>,
    #[serde(alias = "language")]
    pub locale: Option<String>,
    pub subject: Option<String>,
    #[serde(alias = "grade", alias = "grade_level")]
    pub grade_level: Option<i64>,
    #[serde(alias = "question", alias = "statement", alias = "prompt_text")]
    pub prompt_text: Option<String>,
    #[serde(alias = "answers")]
    pub options: Option<Vec<String>>,
    #[serde(alias = "correct_answer", alias = "correct")]
    pub correct_answer: Option<RawAnswer>,
    #[serde(alias = "correct_index")]
    pub correct_index: Option<i64>,
    pub difficulty: Option<i64>,
}

/// Untyped answer value as stored upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Bool(bool),
    Index(i64),
    Number(f64),
    Text(String),
}

impl RawQuestion {
    /// Builder-style constructor used by importers and tests.
    pub fn new(id: impl Into<String>, kind: &str, locale: &str, subject: &str) -> Self {
        Self {
            id: Some(id.into()),
            kind: Some(kind.to_string()),
            locale: Some(locale.to_string()),
            subject: Some(subject.to_string()),
            grade_level: Some(1),
            difficulty: Some(1),
            ..Default::default()
        }
    }

    pub fn prompt(mut self, text: impl Into<String>) -> Self {
        self.prompt_text = Some(text.into());
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn answer(mut self, answer: RawAnswer) -> Self {
        self.correct_answer = Some(answer);
        self
    }

    pub fn grade(mut self, grade: i64) -> Self {
        self.grade_level = Some(grade);
        self
    }

    pub fn difficulty(mut self, difficulty: i64) -> Self {
        self.difficulty = Some(difficulty);
        self
    }
}
