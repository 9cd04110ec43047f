use std::fmt;

use serde::{Deserialize, Serialize};

use super::finding::{Finding, Severity};

/// Verdict status. Serialized with the values the question store accepts
/// for `validation_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QcStatus {
    QcPassed,
    Flagged,
    QcFailed,
}

impl QcStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QcPassed => "qc_passed",
            Self::Flagged => "flagged",
            Self::QcFailed => "qc_failed",
        }
    }
}

impl fmt::Display for QcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated status and score derived from a set of findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: QcStatus,
    /// 0..=100
    pub score: u8,
}

/// Output of one validation call. Has no state beyond its findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub record_id: String,
    pub status: QcStatus,
    /// Quality score, 0..=100.
    pub score: u8,
    pub findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new(record_id: impl Into<String>, verdict: Verdict, findings: Vec<Finding>) -> Self {
        Self {
            record_id: record_id.into(),
            status: verdict.status,
            score: verdict.score,
            findings,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == QcStatus::QcPassed
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    pub fn critical_count(&self) -> usize {
        self.count(Severity::Critical)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.findings.iter().any(|f| f.code == code)
    }
}
