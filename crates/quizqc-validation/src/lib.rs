//! # quizqc-validation
//!
//! Content validation pipeline for quiz questions: the knowledge base,
//! the four rule modules (structural, locale, arithmetic, factual), the
//! rule registry, the verdict resolver, and batch summaries.

pub mod engine;
pub mod knowledge;
pub mod rules;
pub mod summary;
pub mod verdict;

pub use engine::ValidationEngine;
pub use knowledge::{KnowledgeBase, KnowledgeHandle};
pub use rules::{RuleRegistry, RuleScope};
pub use summary::{QcSummary, StatusCounts};
