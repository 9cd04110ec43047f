//! QcErrorCode trait for structured error reporting.

/// Trait for converting QuizQC errors to stable error codes.
/// Every error enum implements this so batch drivers and report writers can
/// group failures without matching on message text.
pub trait QcErrorCode {
    /// Returns the error code string (e.g., "SCHEMA_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const KNOWLEDGE_ERROR: &str = "KNOWLEDGE_ERROR";
