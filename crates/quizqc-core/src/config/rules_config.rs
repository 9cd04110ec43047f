use serde::{Deserialize, Serialize};

use crate::models::RuleId;

/// Rule selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule ids to skip (`structural`, `locale`, `arithmetic`, `factual`, or a custom id).
    pub disabled: Vec<String>,
}

impl RulesConfig {
    pub fn is_enabled(&self, rule: &RuleId) -> bool {
        !self
            .disabled
            .iter()
            .any(|d| RuleId::parse(d) == *rule)
    }
}
