use crate::errors::SchemaError;
use crate::models::{QuestionRecord, ValidationResult};
use crate::schema::{normalize, RawQuestion};

/// Validation entry point consumed by storage writers and batch runners.
pub trait QuestionValidator: Send + Sync {
    /// Validate an already-normalized record.
    fn validate(&self, record: &QuestionRecord) -> ValidationResult;

    /// Normalize, then validate. Schema rejection stops evaluation.
    fn validate_raw(&self, raw: RawQuestion) -> Result<ValidationResult, SchemaError> {
        let record = normalize(raw)?;
        Ok(self.validate(&record))
    }
}
