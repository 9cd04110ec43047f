//! Seams between the pipeline, its rule modules, and the fact store.

pub mod knowledge;
pub mod rule;
pub mod validator;

pub use knowledge::{KnowledgeSource, NoKnowledge};
pub use rule::QcRule;
pub use validator::QuestionValidator;
