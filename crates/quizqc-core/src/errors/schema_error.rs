//! Record schema errors.
//!
//! A `SchemaError` means the record cannot even be interpreted. Records that
//! are interpretable but non-compliant (wrong option count, duplicate
//! options, unresolved answer) pass normalization and are reported as
//! Structural findings instead.

use super::error_code::{self, QcErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Unknown question kind: {value}")]
    UnknownKind { value: String },

    #[error("Invalid locale tag: {value}")]
    InvalidLocale { value: String },

    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: u8,
        max: u8,
    },

    #[error("Answer shape does not match {kind} question: {detail}")]
    ShapeMismatch { kind: &'static str, detail: String },

    #[error("True/false answer {value:?} is not a canonical {language} token ({expected})")]
    NonCanonicalTrueFalse {
        value: String,
        language: String,
        expected: String,
    },
}

impl QcErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_ERROR
    }
}
