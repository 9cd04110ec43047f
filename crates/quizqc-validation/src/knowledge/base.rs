//! In-memory fact store, partitioned by region.

use std::path::Path;

use quizqc_core::constants::ANY_REGION;
use quizqc_core::errors::KnowledgeError;
use quizqc_core::models::{fold_text, FactEntry, TopicKey};
use quizqc_core::traits::KnowledgeSource;
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Leading articles dropped before alias lookup ("la Suisse", "die Schweiz").
const LEADING_ARTICLES: &[&str] = &[
    "the ", "la ", "le ", "les ", "l'", "die ", "der ", "das ", "den ", "dem ", "des ",
];

/// Static mapping `(region, topic) -> FactEntry` plus the entity alias table.
///
/// Read-only once built. Swapping in new content goes through
/// [`super::KnowledgeHandle::replace`].
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    partitions: FxHashMap<String, FxHashMap<TopicKey, FactEntry>>,
    aliases: FxHashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    entity: Vec<EntityDef>,
    #[serde(default)]
    fact: Vec<FactDef>,
}

#[derive(Debug, Deserialize)]
struct EntityDef {
    key: String,
    #[serde(default)]
    names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct FactDef {
    #[serde(default = "any_region")]
    region: String,
    topic: TopicKey,
    #[serde(flatten)]
    entry: FactEntry,
}

fn any_region() -> String {
    ANY_REGION.to_string()
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a knowledge base from TOML (`[[entity]]` and `[[fact]]` tables).
    pub fn from_toml_str(content: &str) -> Result<Self, KnowledgeError> {
        Self::parse(content, "<string>")
    }

    /// Load a knowledge base file from disk.
    pub fn from_path(path: &Path) -> Result<Self, KnowledgeError> {
        let content = std::fs::read_to_string(path).map_err(|_| KnowledgeError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let kb = Self::parse(&content, &path.display().to_string())?;
        tracing::info!(
            path = %path.display(),
            facts = kb.len(),
            aliases = kb.aliases.len(),
            "knowledge base loaded"
        );
        Ok(kb)
    }

    fn parse(content: &str, path: &str) -> Result<Self, KnowledgeError> {
        let file: KnowledgeFile =
            toml::from_str(content).map_err(|e| KnowledgeError::ParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let mut kb = Self::new();
        for entity in &file.entity {
            kb.add_entity(&entity.key, &entity.names)?;
        }
        for fact in file.fact {
            kb.insert_fact(&fact.region, fact.topic, fact.entry)?;
        }
        Ok(kb)
    }

    /// Register an entity key and its surface names. The key itself is
    /// always an accepted name.
    pub fn add_entity<S: AsRef<str>>(
        &mut self,
        key: &str,
        names: &[S],
    ) -> Result<(), KnowledgeError> {
        let key = key.trim().to_ascii_lowercase();
        self.add_alias(&key, &key)?;
        self.add_alias(&key, &key.replace('_', " "))?;
        for name in names {
            self.add_alias(&key, name.as_ref())?;
        }
        Ok(())
    }

    /// Map one surface name to an entity key.
    pub fn add_alias(&mut self, key: &str, name: &str) -> Result<(), KnowledgeError> {
        let normalized = normalize_name(name);
        if normalized.is_empty() {
            return Ok(());
        }
        match self.aliases.get(&normalized) {
            Some(existing) if existing != key => Err(KnowledgeError::ConflictingAlias {
                name: name.to_string(),
                existing: existing.clone(),
            }),
            Some(_) => Ok(()),
            None => {
                self.aliases.insert(normalized, key.to_string());
                Ok(())
            }
        }
    }

    /// Insert a fact. `region` is an upper-case region subtag or `*`.
    pub fn insert_fact(
        &mut self,
        region: &str,
        topic: TopicKey,
        entry: FactEntry,
    ) -> Result<(), KnowledgeError> {
        if entry.value.trim().is_empty() {
            return Err(KnowledgeError::InvalidFact {
                topic: topic.to_string(),
                message: "value must not be empty".to_string(),
            });
        }
        let region = normalize_region(region);
        let partition = self.partitions.entry(region.clone()).or_default();
        if partition.contains_key(&topic) {
            return Err(KnowledgeError::DuplicateFact {
                region,
                topic: topic.to_string(),
            });
        }
        partition.insert(topic, entry);
        Ok(())
    }

    /// Total number of facts across all regions.
    pub fn len(&self) -> usize {
        self.partitions.values().map(FxHashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Region partitions present, sorted.
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self.partitions.keys().map(String::as_str).collect();
        regions.sort_unstable();
        regions
    }
}

impl KnowledgeSource for KnowledgeBase {
    fn lookup(&self, topic: &TopicKey, region: Option<&str>) -> Option<&FactEntry> {
        region
            .and_then(|r| self.partitions.get(&normalize_region(r)))
            .and_then(|p| p.get(topic))
            .or_else(|| self.partitions.get(ANY_REGION).and_then(|p| p.get(topic)))
    }

    fn resolve_entity(&self, name: &str) -> Option<&str> {
        self.aliases.get(&normalize_name(name)).map(String::as_str)
    }
}

fn normalize_region(region: &str) -> String {
    let region = region.trim();
    if region.is_empty() {
        ANY_REGION.to_string()
    } else {
        region.to_ascii_uppercase()
    }
}

/// Folded name with one leading article removed.
fn normalize_name(name: &str) -> String {
    let folded = fold_text(name);
    for article in LEADING_ARTICLES {
        if let Some(rest) = folded.strip_prefix(article) {
            if !rest.is_empty() {
                return rest.trim().to_string();
            }
        }
    }
    folded
}
