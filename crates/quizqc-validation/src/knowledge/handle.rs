use std::path::Path;
use std::sync::{Arc, RwLock};

use quizqc_core::errors::KnowledgeError;

use super::KnowledgeBase;

/// Shared, replaceable reference to the active knowledge base.
///
/// Validations take a [`snapshot`](Self::snapshot) up front, so a
/// [`replace`](Self::replace) never changes the facts seen by a validation
/// already in flight.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeHandle {
    current: Arc<RwLock<Arc<KnowledgeBase>>>,
}

impl KnowledgeHandle {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(kb))),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, KnowledgeError> {
        Ok(Self::new(KnowledgeBase::from_path(path)?))
    }

    /// The knowledge base as of now.
    pub fn snapshot(&self) -> Arc<KnowledgeBase> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Swap in a new knowledge base as a whole.
    pub fn replace(&self, kb: KnowledgeBase) {
        let facts = kb.len();
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::new(kb);
        tracing::info!(facts, "knowledge base replaced");
    }
}
