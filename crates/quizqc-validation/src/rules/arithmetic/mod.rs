//! Arithmetic-extraction rule: recompute simple expressions in the prompt
//! and compare them with the marked answer and the distractors.

pub mod curriculum;
pub mod extract;

use quizqc_core::config::CurriculumConfig;
use quizqc_core::models::{
    CorrectAnswer, Finding, Language, QuestionKind, QuestionRecord, RuleId,
};
use quizqc_core::traits::{KnowledgeSource, QcRule};

use self::extract::{approx_eq, claimed_result, extract, extract_number, Expression};

pub const WRONG_ANSWER: &str = "ARITH_WRONG_ANSWER";
pub const DISTRACTOR_IS_CORRECT: &str = "ARITH_DISTRACTOR_IS_CORRECT";
pub const WRONG_TRUE_FALSE: &str = "ARITH_WRONG_TRUE_FALSE";
pub const DIVISION_BY_ZERO: &str = "ARITH_DIVISION_BY_ZERO";
pub const ANSWER_NOT_NUMERIC: &str = "ARITH_ANSWER_NOT_NUMERIC";

/// Recomputes the first recognized expression in the prompt.
///
/// A prompt with no recognized expression yields no findings.
#[derive(Debug, Clone, Default)]
pub struct ArithmeticRule {
    curriculum: CurriculumConfig,
}

impl ArithmeticRule {
    pub fn new(curriculum: CurriculumConfig) -> Self {
        Self { curriculum }
    }

    pub fn curriculum(&self) -> &CurriculumConfig {
        &self.curriculum
    }
}

impl QcRule for ArithmeticRule {
    fn id(&self) -> RuleId {
        RuleId::Arithmetic
    }

    fn description(&self) -> &'static str {
        "Recomputes prompt arithmetic and checks answers and grade range"
    }

    fn evaluate(&self, record: &QuestionRecord, _knowledge: &dyn KnowledgeSource) -> Vec<Finding> {
        let language = record.locale.language;
        let Some(expression) = extract(&record.prompt_text, language) else {
            return Vec::new();
        };
        let expected = expression.evaluate();

        let mut findings = Vec::new();
        if let Some(rule) = self.curriculum.rule_for(record.grade_level) {
            findings.extend(curriculum::check(&expression, expected, rule));
        }

        let Some(expected) = expected else {
            findings.push(
                Finding::critical(
                    RuleId::Arithmetic,
                    DIVISION_BY_ZERO,
                    format!("Prompt divides by zero: {expression}"),
                )
                .with_field("prompt"),
            );
            return findings;
        };

        match record.kind {
            QuestionKind::NumericInput => {
                if let CorrectAnswer::Literal(value) = &record.correct_answer {
                    compare_answer(&expression, expected, value, language, &mut findings);
                }
            }
            QuestionKind::MultipleChoice => {
                // An unresolved answer is a Structural finding; nothing to compare.
                if let Some(correct) = record.correct_answer_text() {
                    compare_answer(&expression, expected, correct, language, &mut findings);
                    check_distractors(record, &expression, expected, &mut findings);
                }
            }
            QuestionKind::TrueFalse => {
                check_statement(record, &expression, expected, &mut findings);
            }
        }
        findings
    }
}

fn compare_answer(
    expression: &Expression,
    expected: f64,
    answer: &str,
    language: Language,
    findings: &mut Vec<Finding>,
) {
    match extract_number(answer, language) {
        None => findings.push(
            Finding::info(
                RuleId::Arithmetic,
                ANSWER_NOT_NUMERIC,
                format!("No number in answer {answer:?} to compare with {expression}"),
            )
            .with_field("correct_answer"),
        ),
        Some(actual) if !approx_eq(actual, expected) => findings.push(
            Finding::critical(
                RuleId::Arithmetic,
                WRONG_ANSWER,
                format!("{expression} = {expected}, but the answer is {actual}"),
            )
            .with_field("correct_answer"),
        ),
        Some(_) => {}
    }
}

fn check_distractors(
    record: &QuestionRecord,
    expression: &Expression,
    expected: f64,
    findings: &mut Vec<Finding>,
) {
    for (i, option) in record.distractors() {
        if extract_number(option, record.locale.language).is_some_and(|n| approx_eq(n, expected)) {
            findings.push(
                Finding::critical(
                    RuleId::Arithmetic,
                    DISTRACTOR_IS_CORRECT,
                    format!("Option {i} ({option:?}) is also {expression} = {expected}"),
                )
                .with_field(format!("options[{i}]")),
            );
        }
    }
}

/// True/false statements of the form `a op b = c`.
fn check_statement(
    record: &QuestionRecord,
    expression: &Expression,
    expected: f64,
    findings: &mut Vec<Finding>,
) {
    let CorrectAnswer::Boolean(marked) = record.correct_answer else {
        return;
    };
    let Some(claimed) = claimed_result(&record.prompt_text, expression, record.locale.language) else {
        return;
    };
    let holds = approx_eq(claimed, expected);
    if holds != marked {
        findings.push(
            Finding::critical(
                RuleId::Arithmetic,
                WRONG_TRUE_FALSE,
                format!(
                    "{expression} = {claimed} is {holds} ({expression} = {expected}), but the answer is {}",
                    record.locale.language.true_false_token(marked)
                ),
            )
            .with_field("correct_answer"),
        );
    }
}
