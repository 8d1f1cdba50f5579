use async_trait::async_trait;
use dashmap::DashMap;

use meridian_core::errors::MeridianResult;
use meridian_core::knowledge::KnowledgeEntry;
use meridian_core::traits::DurableMedium;

/// Durable medium backed by a concurrent map of serialized entries.
/// Stands in for a real persistence collaborator in tests and demos.
#[derive(Default)]
pub struct InMemoryMedium {
    records: DashMap<String, String>,
}

impl InMemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Deserialize a persisted entry back out, if present.
    pub fn load(&self, key: &str) -> Option<KnowledgeEntry> {
        self.records
            .get(key)
            .and_then(|raw| serde_json::from_str(raw.value()).ok())
    }
}

#[async_trait]
impl DurableMedium for InMemoryMedium {
    async fn persist(&self, entry: &KnowledgeEntry) -> MeridianResult<()> {
        let raw = serde_json::to_string(entry)?;
        self.records.insert(entry.key.clone(), raw);
        Ok(())
    }

    async fn remove(&self, key: &str) -> MeridianResult<()> {
        self.records.remove(key);
        Ok(())
    }
}
