//! # quizqc-core
//!
//! Foundation crate for the QuizQC content validation engine.
//! Defines the question record schema, findings and verdict models,
//! knowledge-base fact types, traits, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod schema;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::QcConfig;
pub use errors::{ConfigError, KnowledgeError, QcErrorCode, SchemaError};
pub use models::{
    CorrectAnswer, FactEntry, Finding, Language, Locale, QcStatus, QuestionKind,
    QuestionRecord, RuleId, Severity, Subject, TopicKey, ValidationResult,
};
pub use schema::{normalize, RawAnswer, RawQuestion};
