//! Configuration system for QuizQC.
//! TOML-based, 3-layer resolution: env > project file > compiled defaults.

pub mod curriculum_config;
pub mod defaults;
pub mod knowledge_config;
pub mod qc_config;
pub mod rules_config;
pub mod scoring_config;

pub use curriculum_config::{CurriculumConfig, GradeRule};
pub use knowledge_config::KnowledgeConfig;
pub use qc_config::QcConfig;
pub use rules_config::RulesConfig;
pub use scoring_config::ScoringConfig;
