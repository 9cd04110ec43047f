use crate::models::{FactEntry, TopicKey};

/// Read-only fact store consulted by the Factual-Lookup rule.
///
/// Lookups are pure and total. `None` means "no rule applies", never
/// "this fact is wrong".
pub trait KnowledgeSource: Send + Sync {
    /// Fact for `topic` in `region`, falling back to the region-independent
    /// partition when the region has no entry.
    fn lookup(&self, topic: &TopicKey, region: Option<&str>) -> Option<&FactEntry>;

    /// Entity key for a surface name ("Schweiz", "la Suisse"), if known.
    fn resolve_entity(&self, name: &str) -> Option<&str>;
}

/// An empty store. Every lookup misses, so factual checks never fire.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoKnowledge;

impl KnowledgeSource for NoKnowledge {
    fn lookup(&self, _topic: &TopicKey, _region: Option<&str>) -> Option<&FactEntry> {
        None
    }

    fn resolve_entity(&self, _name: &str) -> Option<&str> {
        None
    }
}
