//! Top-level QuizQC configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CurriculumConfig, KnowledgeConfig, RulesConfig, ScoringConfig};
use crate::constants::{CONFIG_FILE_NAME, MAX_GRADE, MAX_SCORE, MIN_GRADE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`QUIZQC_*`)
/// 2. Project config (`quizqc.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct QcConfig {
    pub curriculum: CurriculumConfig,
    pub scoring: ScoringConfig,
    pub rules: RulesConfig,
    pub knowledge: KnowledgeConfig,
}

impl QcConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(path) = config.knowledge.path.as_mut() {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }

        Self::validate(&config)?;
        ::tracing::debug!(
            root = %root.display(),
            disabled_rules = ?config.rules.disabled,
            knowledge = ?config.knowledge.path,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (no file, no environment).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let parsed = Self::parse(toml_str, "<string>")?;
        Self::merge(&mut config, &parsed);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &QcConfig) -> Result<(), ConfigError> {
        for grade in MIN_GRADE..=MAX_GRADE {
            if config.curriculum.rule_for(grade).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "curriculum.grades".to_string(),
                    message: format!("missing rule for grade {grade}"),
                });
            }
        }
        if let Some(rule) = config
            .curriculum
            .grades
            .iter()
            .find(|r| !(MIN_GRADE..=MAX_GRADE).contains(&r.grade))
        {
            return Err(ConfigError::ValidationFailed {
                field: "curriculum.grades".to_string(),
                message: format!("grade {} outside {MIN_GRADE}..={MAX_GRADE}", rule.grade),
            });
        }
        for pair in config.curriculum.grades.windows(2) {
            if pair[1].number_max < pair[0].number_max {
                return Err(ConfigError::ValidationFailed {
                    field: "curriculum.grades".to_string(),
                    message: format!(
                        "number_max must not decrease: grade {} allows {}, grade {} allows {}",
                        pair[0].grade, pair[0].number_max, pair[1].grade, pair[1].number_max
                    ),
                });
            }
        }

        let scoring = &config.scoring;
        for (field, value) in [
            ("scoring.critical_penalty", scoring.effective_critical_penalty()),
            ("scoring.warning_penalty", scoring.effective_warning_penalty()),
            ("scoring.warning_floor", scoring.effective_warning_floor()),
        ] {
            if value > MAX_SCORE {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must be between 0 and {MAX_SCORE}"),
                });
            }
        }
        if scoring.effective_critical_penalty() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.critical_penalty".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    fn parse(content: &str, path: &str) -> Result<QcConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut QcConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let file_config = Self::parse(&content, &path.display().to_string())?;
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut QcConfig, other: &QcConfig) {
        base.curriculum.merge(&other.curriculum);

        if other.scoring.critical_penalty.is_some() {
            base.scoring.critical_penalty = other.scoring.critical_penalty;
        }
        if other.scoring.warning_penalty.is_some() {
            base.scoring.warning_penalty = other.scoring.warning_penalty;
        }
        if other.scoring.warning_floor.is_some() {
            base.scoring.warning_floor = other.scoring.warning_floor;
        }

        if !other.rules.disabled.is_empty() {
            base.rules.disabled = other.rules.disabled.clone();
        }

        if other.knowledge.path.is_some() {
            base.knowledge.path = other.knowledge.path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `QUIZQC_SCORING_CRITICAL_PENALTY`, `QUIZQC_RULES_DISABLED`, etc.
    fn apply_env_overrides(config: &mut QcConfig) {
        if let Ok(val) = std::env::var("QUIZQC_SCORING_CRITICAL_PENALTY") {
            if let Ok(v) = val.parse::<u8>() {
                config.scoring.critical_penalty = Some(v);
            }
        }
        if let Ok(val) = std::env::var("QUIZQC_SCORING_WARNING_PENALTY") {
            if let Ok(v) = val.parse::<u8>() {
                config.scoring.warning_penalty = Some(v);
            }
        }
        if let Ok(val) = std::env::var("QUIZQC_SCORING_WARNING_FLOOR") {
            if let Ok(v) = val.parse::<u8>() {
                config.scoring.warning_floor = Some(v);
            }
        }
        if let Ok(val) = std::env::var("QUIZQC_RULES_DISABLED") {
            config.rules.disabled = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Ok(val) = std::env::var("QUIZQC_KNOWLEDGE_PATH") {
            if !val.trim().is_empty() {
                config.knowledge.path = Some(PathBuf::from(val));
            }
        }
    }
}
