//! Tests for the QuizQC configuration system.

use std::path::PathBuf;
use std::sync::Mutex;

use quizqc_core::config::{GradeRule, QcConfig};
use quizqc_core::errors::{ConfigError, QcErrorCode};
use quizqc_core::models::RuleId;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all QUIZQC_ env vars to prevent cross-test contamination.
fn clear_quizqc_env_vars() {
    for key in [
        "QUIZQC_SCORING_CRITICAL_PENALTY",
        "QUIZQC_SCORING_WARNING_PENALTY",
        "QUIZQC_SCORING_WARNING_FLOOR",
        "QUIZQC_RULES_DISABLED",
        "QUIZQC_KNOWLEDGE_PATH",
    ] {
        std::env::remove_var(key);
    }
}

// ─── Defaults ───

#[test]
fn defaults_match_scoring_and_grade_table() {
    let config = QcConfig::default();
    assert_eq!(config.scoring.effective_critical_penalty(), 25);
    assert_eq!(config.scoring.effective_warning_penalty(), 10);
    assert_eq!(config.scoring.effective_warning_floor(), 50);

    let g1 = config.curriculum.rule_for(1).unwrap();
    assert_eq!(g1.number_max, 20);
    assert!(!g1.multiplication);
    assert!(!g1.division);

    let g2 = config.curriculum.rule_for(2).unwrap();
    assert_eq!(g2.number_max, 100);
    assert!(g2.multiplication);
    assert_eq!(g2.max_factor, Some(5));

    assert_eq!(config.curriculum.rule_for(6).unwrap().number_max, 1_000_000);
    assert!(config.curriculum.rule_for(7).is_none());
    assert!(QcConfig::validate(&config).is_ok());
}

// ─── Layered loading ───

#[test]
fn load_without_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quizqc_env_vars();

    let dir = tempdir();
    let config = QcConfig::load(dir.path()).unwrap();
    assert_eq!(config, QcConfig::default());
}

#[test]
fn project_file_then_env_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quizqc_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("quizqc.toml"),
        r#"
[scoring]
critical_penalty = 30
warning_penalty = 15

[rules]
disabled = ["factual"]

[knowledge]
path = "kb/facts.toml"
"#,
    )
    .unwrap();

    std::env::set_var("QUIZQC_SCORING_WARNING_PENALTY", "5");
    std::env::set_var("QUIZQC_RULES_DISABLED", "locale, arithmetic");

    let config = QcConfig::load(dir.path()).unwrap();

    // File beats defaults.
    assert_eq!(config.scoring.critical_penalty, Some(30));
    // Env beats file.
    assert_eq!(config.scoring.warning_penalty, Some(5));
    assert_eq!(config.rules.disabled, vec!["locale", "arithmetic"]);
    assert!(config.rules.is_enabled(&RuleId::Factual));
    assert!(!config.rules.is_enabled(&RuleId::Locale));
    // Relative knowledge path resolves against the project root.
    assert_eq!(
        config.knowledge.path,
        Some(dir.path().join(PathBuf::from("kb/facts.toml")))
    );

    clear_quizqc_env_vars();
}

#[test]
fn unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quizqc_env_vars();

    std::env::set_var("QUIZQC_SCORING_CRITICAL_PENALTY", "lots");
    let config = QcConfig::load(tempdir().path()).unwrap();
    assert_eq!(config.scoring.critical_penalty, None);

    clear_quizqc_env_vars();
}

#[test]
fn malformed_project_file_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_quizqc_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("quizqc.toml"), "[scoring\ncritical_penalty = ").unwrap();
    let err = QcConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

// ─── Curriculum overrides ───

#[test]
fn curriculum_override_replaces_single_grade() {
    let config = QcConfig::from_toml(
        r#"
[[curriculum.grades]]
grade = 2
number_max = 100
max_factor = 10
"#,
    )
    .unwrap();

    let g2 = config.curriculum.rule_for(2).unwrap();
    assert_eq!(g2.max_factor, Some(10));
    assert!(g2.multiplication, "omitted flags default to allowed");
    // Other grades keep their defaults.
    assert_eq!(config.curriculum.rule_for(1).unwrap().number_max, 20);
    assert_eq!(config.curriculum.grades.len(), 6);
}

#[test]
fn decreasing_number_range_is_rejected() {
    let err = QcConfig::from_toml(
        r#"
[[curriculum.grades]]
grade = 3
number_max = 50
"#,
    )
    .unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "curriculum.grades"),
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn grade_outside_range_is_rejected() {
    let mut config = QcConfig::default();
    config.curriculum.grades.push(GradeRule {
        grade: 7,
        number_max: 10_000_000,
        multiplication: true,
        division: true,
        max_factor: None,
        max_divisor: None,
    });
    assert!(QcConfig::validate(&config).is_err());
}

#[test]
fn missing_grade_is_rejected() {
    let mut config = QcConfig::default();
    config.curriculum.grades.retain(|g| g.grade != 4);
    let err = QcConfig::validate(&config).unwrap_err();
    assert!(err.to_string().contains("grade 4"));
}

// ─── Scoring validation ───

#[test]
fn penalty_above_max_score_is_rejected() {
    let err = QcConfig::from_toml("[scoring]\nwarning_floor = 150").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "scoring.warning_floor"));
}

#[test]
fn zero_critical_penalty_is_rejected() {
    assert!(QcConfig::from_toml("[scoring]\ncritical_penalty = 0").is_err());
}

// ─── Round trip ───

#[test]
fn to_toml_reloads_to_same_config() {
    let config = QcConfig::from_toml(
        r#"
[scoring]
warning_floor = 60

[rules]
disabled = ["locale"]
"#,
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    let reloaded = QcConfig::from_toml(&text).unwrap();
    assert_eq!(reloaded, config);
}
