use crate::models::{Finding, QuestionRecord, RuleId};

use super::knowledge::KnowledgeSource;

/// A content rule module.
///
/// Rules are pure: they read the record and the knowledge source and return
/// findings. They never see each other's output, so the pipeline may run
/// them in any order or concurrently.
pub trait QcRule: Send + Sync {
    fn id(&self) -> RuleId;

    fn description(&self) -> &'static str;

    fn evaluate(&self, record: &QuestionRecord, knowledge: &dyn KnowledgeSource) -> Vec<Finding>;
}
