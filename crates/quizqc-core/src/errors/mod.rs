//! Error handling for QuizQC.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Content problems are never errors: they are `Finding`s. The enums here
//! cover records that cannot be interpreted, bad configuration, and
//! knowledge-base files that fail to load.

pub mod config_error;
pub mod error_code;
pub mod knowledge_error;
pub mod schema_error;

pub use config_error::ConfigError;
pub use error_code::QcErrorCode;
pub use knowledge_error::KnowledgeError;
pub use schema_error::SchemaError;
