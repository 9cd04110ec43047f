use serde::{Deserialize, Serialize};

use super::defaults;

/// Verdict scoring weights.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points deducted per Critical finding. Default: 25.
    pub critical_penalty: Option<u8>,
    /// Points deducted per Warning finding. Default: 10.
    pub warning_penalty: Option<u8>,
    /// Lowest score a Flagged record can reach. Default: 50.
    pub warning_floor: Option<u8>,
}

impl ScoringConfig {
    pub fn effective_critical_penalty(&self) -> u8 {
        self.critical_penalty
            .unwrap_or(defaults::DEFAULT_CRITICAL_PENALTY)
    }

    pub fn effective_warning_penalty(&self) -> u8 {
        self.warning_penalty
            .unwrap_or(defaults::DEFAULT_WARNING_PENALTY)
    }

    pub fn effective_warning_floor(&self) -> u8 {
        self.warning_floor.unwrap_or(defaults::DEFAULT_WARNING_FLOOR)
    }
}
