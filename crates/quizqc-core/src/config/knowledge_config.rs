use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the knowledge base is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Path to a knowledge-base TOML file. Relative paths resolve against
    /// the project root passed to `QcConfig::load`.
    pub path: Option<PathBuf>,
}
