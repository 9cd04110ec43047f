use std::fmt;

use serde::{Deserialize, Serialize};

use super::locale::Locale;
use super::subject::Subject;

/// The three supported question shapes. Determines which Structural checks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    #[serde(rename = "number-input")]
    NumericInput,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::TrueFalse => "true-false",
            Self::NumericInput => "number-input",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "multiple-choice" | "multiple_choice" | "multiplechoice" | "mc" => {
                Some(Self::MultipleChoice)
            }
            "true-false" | "true_false" | "truefalse" | "tf" => Some(Self::TrueFalse),
            "number-input" | "numeric-input" | "number_input" | "numeric" => {
                Some(Self::NumericInput)
            }
            _ => None,
        }
    }

    /// Choice kinds answer by pointing into `options`.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::MultipleChoice)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The marked-correct answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum CorrectAnswer {
    /// Position in `options` (choice kinds). May be out of range; the
    /// Structural rule reports that.
    Index(usize),
    /// Canonical true/false token already mapped to a boolean.
    Boolean(bool),
    /// Literal value (numeric input), or choice-kind answer text that did
    /// not match any option.
    Literal(String),
}

/// Canonical in-memory representation of a question under validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    pub kind: QuestionKind,
    pub locale: Locale,
    pub subject: Subject,
    /// 1..=6
    pub grade_level: u8,
    pub prompt_text: String,
    pub options: Vec<String>,
    pub correct_answer: CorrectAnswer,
    /// 1..=5, advisory only.
    pub difficulty: u8,
}

impl QuestionRecord {
    /// Index of the marked-correct option, if it points inside `options`.
    pub fn correct_index(&self) -> Option<usize> {
        match self.correct_answer {
            CorrectAnswer::Index(idx) if idx < self.options.len() => Some(idx),
            _ => None,
        }
    }

    /// Surface text of the marked-correct answer.
    ///
    /// Choice kinds resolve through `options`; numeric input yields the
    /// literal; true/false yields the locale's canonical token.
    pub fn correct_answer_text(&self) -> Option<&str> {
        match &self.correct_answer {
            CorrectAnswer::Index(_) => self.correct_index().map(|i| self.options[i].as_str()),
            CorrectAnswer::Literal(value) if !self.kind.is_choice() => Some(value.as_str()),
            CorrectAnswer::Literal(_) => None,
            CorrectAnswer::Boolean(value) => {
                Some(self.locale.language.true_false_token(*value))
            }
        }
    }

    /// Options other than the marked-correct one, with their positions.
    pub fn distractors(&self) -> impl Iterator<Item = (usize, &str)> {
        let correct = self.correct_index();
        self.options
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != correct)
            .map(|(i, o)| (i, o.as_str()))
    }
}
