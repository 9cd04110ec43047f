use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a finding. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Identifier of the rule module that produced a finding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Structural,
    Locale,
    Arithmetic,
    Factual,
    /// A rule registered by the embedding application.
    Custom(String),
}

impl RuleId {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Structural => "structural",
            Self::Locale => "locale",
            Self::Arithmetic => "arithmetic",
            Self::Factual => "factual",
            Self::Custom(name) => name,
        }
    }

    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "structural" => Self::Structural,
            "locale" => Self::Locale,
            "arithmetic" => Self::Arithmetic,
            "factual" => Self::Factual,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn builtin() -> &'static [RuleId] {
        &[Self::Structural, Self::Locale, Self::Arithmetic, Self::Factual]
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported issue from a rule module.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Finding {
    pub rule: RuleId,
    pub severity: Severity,
    /// Stable machine-readable code, e.g. `STRUCT_DUPLICATE_OPTION`.
    pub code: String,
    pub message: String,
    /// Record field the finding points at (`prompt`, `options[2]`, ...).
    pub field: Option<String>,
}

impl Finding {
    pub fn new(
        rule: RuleId,
        severity: Severity,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule,
            severity,
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    pub fn critical(rule: RuleId, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Critical, code, message)
    }

    pub fn warning(rule: RuleId, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Warning, code, message)
    }

    pub fn info(rule: RuleId, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Info, code, message)
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", self.severity, self.code, self.message)?;
        if let Some(field) = &self.field {
            write!(f, " ({field})")?;
        }
        Ok(())
    }
}
