//! Knowledge-base loading errors.
//!
//! Only raised while loading or replacing the fact store. A lookup miss at
//! validation time is not an error.

use super::error_code::{self, QcErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Knowledge base file not found: {path}")]
    FileNotFound { path: String },

    #[error("Knowledge base parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Duplicate fact for topic {topic} in region {region}")]
    DuplicateFact { region: String, topic: String },

    #[error("Invalid fact for topic {topic}: {message}")]
    InvalidFact { topic: String, message: String },

    #[error("Alias {name:?} already maps to entity {existing}")]
    ConflictingAlias { name: String, existing: String },
}

impl QcErrorCode for KnowledgeError {
    fn error_code(&self) -> &'static str {
        error_code::KNOWLEDGE_ERROR
    }
}
