//! ValidationEngine: runs the registered rules for a record, resolves the
//! verdict, and implements `QuestionValidator`.

use quizqc_core::config::{QcConfig, ScoringConfig};
use quizqc_core::constants::VERSION;
use quizqc_core::errors::{KnowledgeError, SchemaError};
use quizqc_core::models::{Finding, QuestionRecord, ValidationResult};
use quizqc_core::schema::{normalize, RawQuestion};
use quizqc_core::traits::{QcRule, QuestionValidator};
use rayon::prelude::*;

use crate::knowledge::{KnowledgeBase, KnowledgeHandle};
use crate::rules::{RuleRegistry, RuleScope};
use crate::verdict;

/// The content validation pipeline.
///
/// Stateless apart from the read-only knowledge base, so one engine can be
/// shared across threads and records validated in parallel.
pub struct ValidationEngine {
    registry: RuleRegistry,
    knowledge: KnowledgeHandle,
    scoring: ScoringConfig,
}

impl ValidationEngine {
    /// Engine with the built-in rules, default scoring, and an empty
    /// knowledge base (factual checks never fire).
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::new(),
            knowledge: KnowledgeHandle::default(),
            scoring: ScoringConfig::default(),
        }
    }

    /// Engine built from a resolved config: curriculum table, scoring,
    /// disabled rules, and the knowledge base file if one is configured.
    pub fn with_config(config: &QcConfig) -> Result<Self, KnowledgeError> {
        let mut registry = RuleRegistry::with_curriculum(config.curriculum.clone());
        registry.retain_enabled(&config.rules);

        let knowledge = match &config.knowledge.path {
            Some(path) => KnowledgeHandle::from_path(path)?,
            None => KnowledgeHandle::default(),
        };

        tracing::info!(
            version = VERSION,
            rules = ?registry.ids(),
            facts = knowledge.snapshot().len(),
            "validation engine configured"
        );
        Ok(Self {
            registry,
            knowledge,
            scoring: config.scoring.clone(),
        })
    }

    /// Replace the knowledge base.
    pub fn with_knowledge(mut self, kb: KnowledgeBase) -> Self {
        self.knowledge = KnowledgeHandle::new(kb);
        self
    }

    /// Share an existing knowledge handle (replacements become visible here).
    pub fn with_knowledge_handle(mut self, handle: KnowledgeHandle) -> Self {
        self.knowledge = handle;
        self
    }

    /// Replace the rule table.
    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Register an additional rule.
    pub fn register_rule(&mut self, rule: impl QcRule + 'static, scope: RuleScope) {
        self.registry.register(rule, scope);
    }

    pub fn knowledge(&self) -> &KnowledgeHandle {
        &self.knowledge
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Validate one normalized record. Idempotent and side-effect free.
    pub fn validate(&self, record: &QuestionRecord) -> ValidationResult {
        let kb = self.knowledge.snapshot();
        let mut findings: Vec<Finding> = Vec::new();

        for rule in self.registry.rules_for(record) {
            let produced = rule.evaluate(record, &*kb);
            tracing::debug!(
                record = %record.id,
                rule = %rule.id(),
                findings = produced.len(),
                "rule evaluated"
            );
            findings.extend(produced);
        }

        // Rule order must not leak into the result.
        findings.sort();

        let verdict = verdict::resolve(&findings, &self.scoring);
        tracing::debug!(
            record = %record.id,
            status = %verdict.status,
            score = verdict.score,
            "record validated"
        );
        ValidationResult::new(record.id.clone(), verdict, findings)
    }

    /// Normalize, then validate. A schema error stops evaluation.
    pub fn validate_raw(&self, raw: RawQuestion) -> Result<ValidationResult, SchemaError> {
        let id = raw.id.clone().unwrap_or_default();
        let record = normalize(raw)
            .inspect_err(|e| tracing::debug!(record = %id, error = %e, "record rejected"))?;
        Ok(self.validate(&record))
    }

    /// Validate many raw records in parallel. A schema error is reported
    /// for its own record only.
    pub fn validate_batch(
        &self,
        raws: &[RawQuestion],
    ) -> Vec<Result<ValidationResult, SchemaError>> {
        let results: Vec<_> = raws
            .par_iter()
            .map(|raw| self.validate_raw(raw.clone()))
            .collect();

        let rejected = results.iter().filter(|r| r.is_err()).count();
        let failed = results
            .iter()
            .filter(|r| r.as_ref().is_ok_and(|v| v.critical_count() > 0))
            .count();
        tracing::info!(total = results.len(), rejected, failed, "batch validated");
        results
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionValidator for ValidationEngine {
    fn validate(&self, record: &QuestionRecord) -> ValidationResult {
        ValidationEngine::validate(self, record)
    }

    fn validate_raw(&self, raw: RawQuestion) -> Result<ValidationResult, SchemaError> {
        ValidationEngine::validate_raw(self, raw)
    }
}
