//! Shared constants for the QuizQC validation engine.

/// QuizQC version string, logged when an engine is configured.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of options a multiple-choice question must carry.
pub const MULTIPLE_CHOICE_OPTION_COUNT: usize = 4;

/// Shortest prompt, in characters after trimming, that can carry a question.
pub const MIN_PROMPT_CHARS: usize = 5;

/// Lowest and highest supported grade level.
pub const MIN_GRADE: u8 = 1;
pub const MAX_GRADE: u8 = 6;

/// Lowest and highest supported difficulty.
pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Highest possible quality score.
pub const MAX_SCORE: u8 = 100;

/// Absolute tolerance when comparing an extracted answer against a computed result.
pub const NUMERIC_TOLERANCE: f64 = 0.01;

/// Region partition of the knowledge base that applies to every locale.
pub const ANY_REGION: &str = "*";

/// Project config file name looked up by `QcConfig::load`.
pub const CONFIG_FILE_NAME: &str = "quizqc.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "QUIZQC_LOG";
