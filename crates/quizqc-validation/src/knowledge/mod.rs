//! Knowledge base: region-partitioned verified facts and entity aliases.

pub mod base;
pub mod handle;

pub use base::KnowledgeBase;
pub use handle::KnowledgeHandle;
