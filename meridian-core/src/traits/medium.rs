use async_trait::async_trait;

use crate::errors::MeridianResult;
use crate::knowledge::KnowledgeEntry;

/// Write-through persistence behind the in-memory knowledge store.
///
/// The store never reads back through this trait on the hot path; it
/// exists so entries survive restarts and can be inspected offline.
#[async_trait]
pub trait DurableMedium: Send + Sync {
    /// Persist the current state of an entry, replacing any prior copy.
    async fn persist(&self, entry: &KnowledgeEntry) -> MeridianResult<()>;

    /// Remove a persisted entry, if present.
    async fn remove(&self, key: &str) -> MeridianResult<()>;
}
