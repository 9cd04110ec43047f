//! Factual-lookup rule.
//!
//! A finding requires three things in sequence: a recognized template, an
//! entity name the knowledge base can resolve, and a fact for that topic in
//! the record's region. Anything short of that is a no-op, so a regional
//! superlative ("highest peak in the east") is never judged against a
//! national fact.

pub mod templates;

use quizqc_core::models::{
    CorrectAnswer, FactEntry, Finding, QuestionKind, QuestionRecord, RuleId, TopicKey,
};
use quizqc_core::traits::{KnowledgeSource, QcRule};

pub const WRONG_ANSWER: &str = "FACT_WRONG_ANSWER";
pub const DISTRACTOR_IS_CORRECT: &str = "FACT_DISTRACTOR_IS_CORRECT";

#[derive(Debug, Default, Clone, Copy)]
pub struct FactualRule;

impl FactualRule {
    /// The first template hit that resolves to a known fact.
    fn find_fact<'k>(
        record: &QuestionRecord,
        knowledge: &'k dyn KnowledgeSource,
    ) -> Option<(TopicKey, &'k FactEntry)> {
        templates::matches(record.locale.language, &record.prompt_text)
            .into_iter()
            .find_map(|hit| {
                let entity = knowledge.resolve_entity(hit.entity)?;
                let topic = TopicKey::new(hit.relation, entity);
                let fact = knowledge.lookup(&topic, record.locale.region())?;
                Some((topic, fact))
            })
    }
}

impl QcRule for FactualRule {
    fn id(&self) -> RuleId {
        RuleId::Factual
    }

    fn description(&self) -> &'static str {
        "Checks templated fact questions against the knowledge base"
    }

    fn evaluate(&self, record: &QuestionRecord, knowledge: &dyn KnowledgeSource) -> Vec<Finding> {
        // True/false statements carry no answer text to compare.
        if record.kind == QuestionKind::TrueFalse {
            return Vec::new();
        }
        let Some((topic, fact)) = Self::find_fact(record, knowledge) else {
            return Vec::new();
        };
        tracing::debug!(record = %record.id, %topic, "factual template matched");

        let mut findings = Vec::new();
        let answer = match (&record.kind, &record.correct_answer) {
            (QuestionKind::NumericInput, CorrectAnswer::Literal(value)) => Some(value.as_str()),
            (QuestionKind::MultipleChoice, _) => record.correct_answer_text(),
            _ => None,
        };
        if let Some(answer) = answer {
            if !fact.accepts(answer) {
                findings.push(
                    Finding::critical(
                        RuleId::Factual,
                        WRONG_ANSWER,
                        format!("{topic} is {:?}, but the answer is {answer:?}", fact.value),
                    )
                    .with_field("correct_answer"),
                );
            }
        }

        if record.kind == QuestionKind::MultipleChoice && record.correct_index().is_some() {
            for (i, option) in record.distractors() {
                if fact.accepts(option) {
                    findings.push(
                        Finding::critical(
                            RuleId::Factual,
                            DISTRACTOR_IS_CORRECT,
                            format!("Option {i} ({option:?}) is the verified {topic}"),
                        )
                        .with_field(format!("options[{i}]")),
                    );
                }
            }
        }
        findings
    }
}
