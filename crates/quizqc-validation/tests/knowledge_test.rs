//! Tests for loading, querying, and replacing the knowledge base.

use std::io::Write;

use quizqc_core::errors::{KnowledgeError, QcErrorCode};
use quizqc_core::models::{FactEntry, TopicKey};
use quizqc_core::traits::KnowledgeSource;
use quizqc_validation::{KnowledgeBase, KnowledgeHandle};

fn seed() -> KnowledgeBase {
    KnowledgeBase::from_path(&test_fixtures::seed_knowledge_path()).unwrap()
}

// ─── Loading ───

#[test]
fn seed_loads_with_regional_partition() {
    let kb = seed();
    assert!(kb.len() >= 20);
    assert_eq!(kb.regions(), vec!["*", "CH"]);
}

#[test]
fn entity_names_resolve_across_languages() {
    let kb = seed();
    for name in ["Switzerland", "die Schweiz", "la Suisse", "SCHWEIZ", "switzerland"] {
        assert_eq!(kb.resolve_entity(name), Some("switzerland"), "{name}");
    }
    assert_eq!(kb.resolve_entity("United Kingdom"), Some("united_kingdom"));
    assert_eq!(kb.resolve_entity("united kingdom"), Some("united_kingdom"));
    assert_eq!(kb.resolve_entity("Atlantis"), None);
}

#[test]
fn lookup_falls_back_to_any_region() {
    let kb = seed();
    let capital = TopicKey::new("capital", "switzerland");
    assert_eq!(kb.lookup(&capital, Some("CH")).unwrap().value, "Bern");
    assert_eq!(kb.lookup(&capital, Some("gb")).unwrap().value, "Bern");
    assert_eq!(kb.lookup(&capital, None).unwrap().value, "Bern");

    let cantons = TopicKey::new("count", "cantons");
    assert_eq!(kb.lookup(&cantons, Some("ch")).unwrap().value, "26");
    assert!(kb.lookup(&cantons, Some("GB")).is_none());
    assert!(kb.lookup(&cantons, None).is_none());
}

#[test]
fn inline_toml_with_defaults() {
    let kb = KnowledgeBase::from_toml_str(
        r#"
        [[entity]]
        key = "peru"
        names = ["Pérou"]

        [[fact]]
        topic = "capital:peru"
        value = "Lima"
        "#,
    )
    .unwrap();
    assert_eq!(kb.regions(), vec!["*"]);
    assert_eq!(kb.resolve_entity("Pérou"), Some("peru"));
    let fact = kb.lookup(&TopicKey::new("capital", "peru"), Some("CH")).unwrap();
    assert!(fact.synonyms.is_empty());
    assert!(fact.accepts("lima"));
}

#[test]
fn regional_override_wins_over_any() {
    let mut kb = KnowledgeBase::new();
    let topic = TopicKey::new("count", "official_languages");
    kb.insert_fact("*", topic.clone(), FactEntry::new("1")).unwrap();
    kb.insert_fact("ch", topic.clone(), FactEntry::new("4")).unwrap();
    assert_eq!(kb.lookup(&topic, Some("CH")).unwrap().value, "4");
    assert_eq!(kb.lookup(&topic, Some("FR")).unwrap().value, "1");
    assert_eq!(kb.len(), 2);
}

// ─── Errors ───

#[test]
fn duplicate_fact_is_rejected() {
    let err = KnowledgeBase::from_toml_str(
        r#"
        [[fact]]
        topic = "capital:switzerland"
        value = "Bern"

        [[fact]]
        region = "*"
        topic = "Capital:Switzerland"
        value = "Zurich"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, KnowledgeError::DuplicateFact { ref region, .. } if region == "*"));
    assert_eq!(err.error_code(), "KNOWLEDGE_ERROR");
}

#[test]
fn conflicting_alias_is_rejected() {
    let mut kb = KnowledgeBase::new();
    kb.add_entity("georgia_country", &["Georgia"]).unwrap();
    let err = kb.add_entity("georgia_state", &["Georgia"]).unwrap_err();
    assert!(matches!(
        err,
        KnowledgeError::ConflictingAlias { ref existing, .. } if existing == "georgia_country"
    ));
    kb.add_alias("georgia_country", "the Georgia").unwrap();
}

#[test]
fn empty_value_is_rejected() {
    let err = KnowledgeBase::new()
        .insert_fact("*", TopicKey::new("capital", "nowhere"), FactEntry::new("  "))
        .unwrap_err();
    assert!(matches!(err, KnowledgeError::InvalidFact { .. }));
}

#[test]
fn malformed_topic_is_a_parse_error() {
    let err = KnowledgeBase::from_toml_str("[[fact]]\ntopic = \"capital\"\nvalue = \"Bern\"\n")
        .unwrap_err();
    assert!(matches!(err, KnowledgeError::ParseError { ref path, .. } if path == "<string>"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = KnowledgeBase::from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, KnowledgeError::FileNotFound { .. }));
}

// ─── Handle ───

#[test]
fn handle_replace_keeps_existing_snapshots() {
    let handle = KnowledgeHandle::default();
    let before = handle.snapshot();
    assert!(before.is_empty());

    handle.replace(seed());
    assert!(before.is_empty());
    assert!(!handle.snapshot().is_empty());
}

#[test]
fn handle_clones_share_state() {
    let handle = KnowledgeHandle::default();
    let other = handle.clone();
    handle.replace(seed());
    assert_eq!(other.snapshot().len(), handle.snapshot().len());
}

#[test]
fn handle_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[[fact]]\ntopic = \"count:oceans\"\nvalue = \"5\"").unwrap();
    let handle = KnowledgeHandle::from_path(file.path()).unwrap();
    assert_eq!(handle.snapshot().len(), 1);
}
