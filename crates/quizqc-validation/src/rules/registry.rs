//! Rule registry: which rules run for which language and subject.

use quizqc_core::config::{CurriculumConfig, RulesConfig};
use quizqc_core::models::{Language, QuestionRecord, RuleId, Subject};
use quizqc_core::traits::QcRule;

use super::{
    ArithmeticRule, EnglishSpellingRule, FactualRule, StructuralRule, SwissFrenchNumeralRule,
    SwissGermanSharpSRule,
};

/// Where a rule applies. Empty lists mean "any".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleScope {
    pub languages: Vec<Language>,
    pub subjects: Vec<Subject>,
    pub excluded_subjects: Vec<Subject>,
}

impl RuleScope {
    /// Applies to every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn languages(languages: impl IntoIterator<Item = Language>) -> Self {
        Self {
            languages: languages.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn subjects(subjects: impl IntoIterator<Item = Subject>) -> Self {
        Self {
            subjects: subjects.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn excluding_subjects(subjects: impl IntoIterator<Item = Subject>) -> Self {
        Self {
            excluded_subjects: subjects.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn applies_to(&self, record: &QuestionRecord) -> bool {
        (self.languages.is_empty() || self.languages.contains(&record.locale.language))
            && (self.subjects.is_empty() || self.subjects.contains(&record.subject))
            && !self.excluded_subjects.contains(&record.subject)
    }
}

struct RegisteredRule {
    rule: Box<dyn QcRule>,
    scope: RuleScope,
}

/// Ordered table of rules keyed by scope.
///
/// New locales or domains are supported by registering another rule; the
/// pipeline never needs to change.
pub struct RuleRegistry {
    rules: Vec<RegisteredRule>,
}

impl RuleRegistry {
    /// Registry with the built-in rules and the default curriculum.
    pub fn new() -> Self {
        Self::with_curriculum(CurriculumConfig::default())
    }

    /// Registry with the built-in rules, using `curriculum` for grade checks.
    pub fn with_curriculum(curriculum: CurriculumConfig) -> Self {
        let mut registry = Self::empty();
        registry.register(StructuralRule, RuleScope::all());
        registry.register(EnglishSpellingRule, RuleScope::languages([Language::English]));
        registry.register(SwissFrenchNumeralRule, RuleScope::languages([Language::French]));
        registry.register(SwissGermanSharpSRule, RuleScope::languages([Language::German]));
        registry.register(
            ArithmeticRule::new(curriculum),
            RuleScope::subjects([Subject::Math]),
        );
        registry.register(
            FactualRule,
            RuleScope::excluding_subjects([Subject::Math, Subject::LanguageArts]),
        );
        registry
    }

    /// Registry with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn register(&mut self, rule: impl QcRule + 'static, scope: RuleScope) {
        self.register_boxed(Box::new(rule), scope);
    }

    pub fn register_boxed(&mut self, rule: Box<dyn QcRule>, scope: RuleScope) {
        tracing::debug!(rule = %rule.id(), "rule registered");
        self.rules.push(RegisteredRule { rule, scope });
    }

    /// Drop every rule whose id the config disables.
    pub fn retain_enabled(&mut self, config: &RulesConfig) {
        self.rules.retain(|r| config.is_enabled(&r.rule.id()));
    }

    /// Rules that apply to `record`, in registration order.
    pub fn rules_for<'a>(
        &'a self,
        record: &'a QuestionRecord,
    ) -> impl Iterator<Item = &'a dyn QcRule> + 'a {
        self.rules
            .iter()
            .filter(move |r| r.scope.applies_to(record))
            .map(|r| -> &'a dyn QcRule { r.rule.as_ref() })
    }

    /// Distinct rule ids, in registration order.
    pub fn ids(&self) -> Vec<RuleId> {
        let mut ids: Vec<RuleId> = Vec::new();
        for r in &self.rules {
            let id = r.rule.id();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
