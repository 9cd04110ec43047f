//! Structural checks. Every finding here is Critical.

use std::sync::LazyLock;

use quizqc_core::constants::{MIN_PROMPT_CHARS, MULTIPLE_CHOICE_OPTION_COUNT};
use quizqc_core::models::{
    parse_number, CorrectAnswer, Finding, QuestionKind, QuestionRecord, RuleId,
};
use quizqc_core::traits::{KnowledgeSource, QcRule};
use regex::Regex;

pub const EMPTY_PROMPT: &str = "STRUCT_EMPTY_PROMPT";
pub const PROMPT_TOO_SHORT: &str = "STRUCT_PROMPT_TOO_SHORT";
pub const PLACEHOLDER_TEXT: &str = "STRUCT_PLACEHOLDER_TEXT";
pub const OPTION_COUNT: &str = "STRUCT_OPTION_COUNT";
pub const EMPTY_OPTION: &str = "STRUCT_EMPTY_OPTION";
pub const DUPLICATE_OPTION: &str = "STRUCT_DUPLICATE_OPTION";
pub const ANSWER_UNRESOLVED: &str = "STRUCT_ANSWER_UNRESOLVED";
pub const TRUE_FALSE_OPTIONS: &str = "STRUCT_TRUE_FALSE_OPTIONS";
pub const ANSWER_NOT_NUMERIC: &str = "STRUCT_ANSWER_NOT_NUMERIC";

/// Unfinished-authoring markers. `XXX` only as a standalone word so Roman
/// numerals such as `XXXV` pass.
static RE_PLACEHOLDER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\[FILL\]|\bTODO\b|\bPLACEHOLDER\b|\bXXX\b").ok());

/// Shape checks per question kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralRule;

impl QcRule for StructuralRule {
    fn id(&self) -> RuleId {
        RuleId::Structural
    }

    fn description(&self) -> &'static str {
        "Option count, answer resolvability, duplicate and empty text, placeholders"
    }

    fn evaluate(&self, record: &QuestionRecord, _knowledge: &dyn KnowledgeSource) -> Vec<Finding> {
        let mut findings = Vec::new();
        check_prompt(record, &mut findings);
        check_options_text(record, &mut findings);
        match record.kind {
            QuestionKind::MultipleChoice => check_multiple_choice(record, &mut findings),
            QuestionKind::TrueFalse => check_true_false(record, &mut findings),
            QuestionKind::NumericInput => check_numeric(record, &mut findings),
        }
        findings
    }
}

fn critical(code: &str, message: String, field: impl Into<String>) -> Finding {
    Finding::critical(RuleId::Structural, code, message).with_field(field)
}

fn has_placeholder(text: &str) -> bool {
    RE_PLACEHOLDER.as_ref().is_some_and(|re| re.is_match(text))
}

fn check_prompt(record: &QuestionRecord, findings: &mut Vec<Finding>) {
    let length = record.prompt_text.trim().chars().count();
    if length == 0 {
        findings.push(critical(EMPTY_PROMPT, "Prompt text is empty".to_string(), "prompt"));
    } else if length < MIN_PROMPT_CHARS {
        findings.push(critical(
            PROMPT_TOO_SHORT,
            format!("Prompt has {length} characters, needs at least {MIN_PROMPT_CHARS}"),
            "prompt",
        ));
    } else if has_placeholder(&record.prompt_text) {
        findings.push(critical(
            PLACEHOLDER_TEXT,
            "Placeholder text detected in prompt".to_string(),
            "prompt",
        ));
    }
}

fn check_options_text(record: &QuestionRecord, findings: &mut Vec<Finding>) {
    for (i, option) in record.options.iter().enumerate() {
        let field = format!("options[{i}]");
        if option.trim().is_empty() {
            findings.push(critical(EMPTY_OPTION, format!("Option {i} is empty"), field));
        } else if has_placeholder(option) {
            findings.push(critical(
                PLACEHOLDER_TEXT,
                format!("Placeholder text detected in option {i}"),
                field,
            ));
        }
    }
}

fn check_multiple_choice(record: &QuestionRecord, findings: &mut Vec<Finding>) {
    let count = record.options.len();
    if count != MULTIPLE_CHOICE_OPTION_COUNT {
        findings.push(critical(
            OPTION_COUNT,
            format!("Multiple choice needs exactly {MULTIPLE_CHOICE_OPTION_COUNT} options, has {count}"),
            "options",
        ));
    }

    let folded: Vec<String> = record
        .options
        .iter()
        .map(|o| o.trim().to_lowercase())
        .collect();
    for (j, option) in folded.iter().enumerate() {
        if option.is_empty() {
            continue;
        }
        if let Some(i) = folded[..j].iter().position(|earlier| earlier == option) {
            findings.push(critical(
                DUPLICATE_OPTION,
                format!("Option {j} duplicates option {i} ({:?})", record.options[j].trim()),
                format!("options[{j}]"),
            ));
        }
    }

    let unresolved = match &record.correct_answer {
        CorrectAnswer::Index(idx) if *idx < count => None,
        CorrectAnswer::Index(idx) => Some(format!(
            "Correct answer index {idx} is outside the {count} options"
        )),
        CorrectAnswer::Literal(text) => {
            Some(format!("Correct answer {text:?} not found in options"))
        }
        CorrectAnswer::Boolean(b) => Some(format!(
            "Boolean correct answer {b} on a multiple-choice question"
        )),
    };
    if let Some(message) = unresolved {
        findings.push(critical(ANSWER_UNRESOLVED, message, "correct_answer"));
    }
}

fn check_true_false(record: &QuestionRecord, findings: &mut Vec<Finding>) {
    let (t, f) = record.locale.language.true_false_tokens();
    if !record.options.is_empty() {
        let trimmed: Vec<&str> = record.options.iter().map(|o| o.trim()).collect();
        let canonical = trimmed.len() == 2 && trimmed.contains(&t) && trimmed.contains(&f);
        if !canonical {
            findings.push(critical(
                TRUE_FALSE_OPTIONS,
                format!("True/false options must be exactly {t:?} and {f:?}"),
                "options",
            ));
        }
    }
    if !matches!(record.correct_answer, CorrectAnswer::Boolean(_)) {
        findings.push(critical(
            ANSWER_UNRESOLVED,
            format!("True/false answer must be {t:?} or {f:?}"),
            "correct_answer",
        ));
    }
}

fn check_numeric(record: &QuestionRecord, findings: &mut Vec<Finding>) {
    match &record.correct_answer {
        CorrectAnswer::Literal(value)
            if parse_number(value, record.locale.language).is_some() => {}
        CorrectAnswer::Literal(value) => findings.push(critical(
            ANSWER_NOT_NUMERIC,
            format!("Numeric answer {value:?} does not parse as a number"),
            "correct_answer",
        )),
        other => findings.push(critical(
            ANSWER_UNRESOLVED,
            format!("Numeric input needs a literal answer, got {other:?}"),
            "correct_answer",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_markers() {
        assert!(has_placeholder("Was ist [FILL]?"));
        assert!(has_placeholder("todo: write question"));
        assert!(has_placeholder("XXX"));
        assert!(!has_placeholder("Welche Zahl ist XXXV?"));
        assert!(!has_placeholder("Placeholders are fine inside words"));
    }
}
