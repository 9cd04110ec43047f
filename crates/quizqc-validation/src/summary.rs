//! Batch QC report: totals plus per-language, per-subject, per-grade counts.

use std::collections::BTreeMap;

use quizqc_core::errors::SchemaError;
use quizqc_core::models::{Locale, QcStatus, Subject, ValidationResult};
use quizqc_core::schema::RawQuestion;
use serde::Serialize;

/// Key used when a rejected record lacks a usable language or subject.
const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub passed: usize,
    pub flagged: usize,
    pub failed: usize,
    /// Records that did not pass schema normalization.
    pub rejected: usize,
}

impl StatusCounts {
    fn add(&mut self, outcome: Option<QcStatus>) {
        self.total += 1;
        match outcome {
            Some(QcStatus::QcPassed) => self.passed += 1,
            Some(QcStatus::Flagged) => self.flagged += 1,
            Some(QcStatus::QcFailed) => self.failed += 1,
            None => self.rejected += 1,
        }
    }

    /// Share of records that passed, 0.0 for an empty set.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.passed as f64 / self.total as f64
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QcSummary {
    pub overall: StatusCounts,
    pub by_language: BTreeMap<String, StatusCounts>,
    pub by_subject: BTreeMap<String, StatusCounts>,
    pub by_grade: BTreeMap<u8, StatusCounts>,
}

impl QcSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a batch. `results[i]` must belong to `raws[i]`, as returned by
    /// `ValidationEngine::validate_batch`.
    pub fn from_batch(
        raws: &[RawQuestion],
        results: &[Result<ValidationResult, SchemaError>],
    ) -> Self {
        let mut summary = Self::new();
        for (raw, result) in raws.iter().zip(results) {
            summary.record(raw, result.as_ref().ok().map(|r| r.status));
        }
        summary
    }

    /// Count one record. `None` means the record was rejected.
    pub fn record(&mut self, raw: &RawQuestion, outcome: Option<QcStatus>) {
        self.overall.add(outcome);

        let language = raw
            .locale
            .as_deref()
            .and_then(|l| l.parse::<Locale>().ok())
            .map(|l| l.language.code().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());
        self.by_language.entry(language).or_default().add(outcome);

        let subject = raw
            .subject
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| Subject::parse(s).as_str().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());
        self.by_subject.entry(subject).or_default().add(outcome);

        if let Some(grade) = raw.grade_level.and_then(|g| u8::try_from(g).ok()) {
            self.by_grade.entry(grade).or_default().add(outcome);
        }
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
