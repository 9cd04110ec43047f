//! Data model shared by the schema, rules, and pipeline.

pub mod fact;
pub mod finding;
pub mod locale;
pub mod question;
pub mod subject;
pub mod validation_result;

pub use fact::{fold_text, parse_number, parse_plain_number, FactEntry, TopicKey};
pub use finding::{Finding, RuleId, Severity};
pub use locale::{Language, Locale};
pub use question::{CorrectAnswer, QuestionKind, QuestionRecord};
pub use subject::Subject;
pub use validation_result::{QcStatus, ValidationResult, Verdict};
