//! `normalize(raw) -> QuestionRecord | SchemaError`.
//!
//! Rejects, never coerces: missing required fields, out-of-range grade or
//! difficulty, unknown kinds, bad locale tags, and answers whose shape does
//! not fit the declared kind. Anything interpretable passes through so the
//! Structural rule can judge it.

use crate::constants::{MAX_DIFFICULTY, MAX_GRADE, MIN_DIFFICULTY, MIN_GRADE};
use crate::errors::SchemaError;
use crate::models::{CorrectAnswer, Language, Locale, QuestionKind, QuestionRecord, Subject};

use super::raw::{RawAnswer, RawQuestion};

pub fn normalize(raw: RawQuestion) -> Result<QuestionRecord, SchemaError> {
    let id = required_text(raw.id, "id")?;

    let kind_value = required_text(raw.kind, "kind")?;
    let kind = QuestionKind::parse(&kind_value)
        .ok_or(SchemaError::UnknownKind { value: kind_value })?;

    let locale: Locale = required_text(raw.locale, "locale")?.parse()?;
    let subject = Subject::parse(&required_text(raw.subject, "subject")?);

    let grade_level = in_range(
        raw.grade_level.ok_or(SchemaError::MissingField { field: "grade_level" })?,
        "grade_level",
        MIN_GRADE,
        MAX_GRADE,
    )?;
    let difficulty = in_range(
        raw.difficulty.ok_or(SchemaError::MissingField { field: "difficulty" })?,
        "difficulty",
        MIN_DIFFICULTY,
        MAX_DIFFICULTY,
    )?;

    let prompt_text = raw
        .prompt_text
        .ok_or(SchemaError::MissingField { field: "prompt_text" })?;
    let options = raw.options.unwrap_or_default();

    let correct_answer = match kind {
        QuestionKind::MultipleChoice => {
            choice_answer(raw.correct_index, raw.correct_answer, &options)?
        }
        QuestionKind::TrueFalse => true_false_answer(raw.correct_answer, locale.language)?,
        QuestionKind::NumericInput => numeric_answer(raw.correct_answer)?,
    };

    Ok(QuestionRecord {
        id,
        kind,
        locale,
        subject,
        grade_level,
        prompt_text,
        options,
        correct_answer,
        difficulty,
    })
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, SchemaError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(SchemaError::MissingField { field }),
    }
}

fn in_range(value: i64, field: &'static str, min: u8, max: u8) -> Result<u8, SchemaError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(SchemaError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value as u8)
}

fn index_from(value: i64, kind: QuestionKind) -> Result<usize, SchemaError> {
    usize::try_from(value).map_err(|_| SchemaError::ShapeMismatch {
        kind: kind.as_str(),
        detail: format!("negative answer index {value}"),
    })
}

fn choice_answer(
    correct_index: Option<i64>,
    correct_answer: Option<RawAnswer>,
    options: &[String],
) -> Result<CorrectAnswer, SchemaError> {
    let kind = QuestionKind::MultipleChoice;
    if let Some(idx) = correct_index {
        return Ok(CorrectAnswer::Index(index_from(idx, kind)?));
    }
    match correct_answer {
        None => Err(SchemaError::MissingField {
            field: "correct_answer",
        }),
        Some(RawAnswer::Index(idx)) => Ok(CorrectAnswer::Index(index_from(idx, kind)?)),
        Some(RawAnswer::Number(n)) if n.fract() == 0.0 && n >= 0.0 => {
            Ok(CorrectAnswer::Index(n as usize))
        }
        Some(RawAnswer::Number(n)) => Err(SchemaError::ShapeMismatch {
            kind: kind.as_str(),
            detail: format!("answer index {n} is not a whole number"),
        }),
        Some(RawAnswer::Bool(b)) => Err(SchemaError::ShapeMismatch {
            kind: kind.as_str(),
            detail: format!("boolean answer {b}"),
        }),
        Some(RawAnswer::Text(text)) => {
            let wanted = text.trim().to_lowercase();
            if let Some(pos) = options
                .iter()
                .position(|o| o.trim().to_lowercase() == wanted)
            {
                return Ok(CorrectAnswer::Index(pos));
            }
            // Legacy rows store the index as a string.
            match text.trim().parse::<usize>() {
                Ok(idx) => Ok(CorrectAnswer::Index(idx)),
                Err(_) => Ok(CorrectAnswer::Literal(text)),
            }
        }
    }
}

fn true_false_answer(
    correct_answer: Option<RawAnswer>,
    language: Language,
) -> Result<CorrectAnswer, SchemaError> {
    let kind = QuestionKind::TrueFalse;
    match correct_answer {
        None => Err(SchemaError::MissingField {
            field: "correct_answer",
        }),
        Some(RawAnswer::Bool(b)) => Ok(CorrectAnswer::Boolean(b)),
        Some(RawAnswer::Text(token)) => match language.parse_true_false(&token) {
            Some(b) => Ok(CorrectAnswer::Boolean(b)),
            None => {
                let (t, f) = language.true_false_tokens();
                Err(SchemaError::NonCanonicalTrueFalse {
                    value: token,
                    language: language.code().to_string(),
                    expected: format!("{t}/{f}"),
                })
            }
        },
        Some(other) => Err(SchemaError::ShapeMismatch {
            kind: kind.as_str(),
            detail: format!("numeric answer {other:?}"),
        }),
    }
}

fn numeric_answer(correct_answer: Option<RawAnswer>) -> Result<CorrectAnswer, SchemaError> {
    match correct_answer {
        None => Err(SchemaError::MissingField {
            field: "correct_answer",
        }),
        Some(RawAnswer::Index(n)) => Ok(CorrectAnswer::Literal(n.to_string())),
        Some(RawAnswer::Number(n)) => Ok(CorrectAnswer::Literal(n.to_string())),
        Some(RawAnswer::Text(text)) => Ok(CorrectAnswer::Literal(text)),
        Some(RawAnswer::Bool(b)) => Err(SchemaError::ShapeMismatch {
            kind: QuestionKind::NumericInput.as_str(),
            detail: format!("boolean answer {b}"),
        }),
    }
}
