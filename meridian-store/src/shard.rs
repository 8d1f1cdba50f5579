use std::collections::HashMap;

use meridian_core::knowledge::{KnowledgeEntry, Tier};

/// One lock shard: three tier maps over a disjoint slice of the key space.
/// A key lives in at most one of the maps; moves happen while the caller
/// holds the shard lock, so single-tier residency is structural.
#[derive(Debug, Default)]
pub struct TierShard {
    core: HashMap<String, KnowledgeEntry>,
    extended: HashMap<String, KnowledgeEntry>,
    temp: HashMap<String, KnowledgeEntry>,
}

impl TierShard {
    fn map(&self, tier: Tier) -> &HashMap<String, KnowledgeEntry> {
        match tier {
            Tier::Core => &self.core,
            Tier::Extended => &self.extended,
            Tier::Temp => &self.temp,
        }
    }

    fn map_mut(&mut self, tier: Tier) -> &mut HashMap<String, KnowledgeEntry> {
        match tier {
            Tier::Core => &mut self.core,
            Tier::Extended => &mut self.extended,
            Tier::Temp => &mut self.temp,
        }
    }

    /// Lookup in priority order: core, extended, temp.
    pub fn get(&self, key: &str) -> Option<&KnowledgeEntry> {
        Tier::PRIORITY.iter().find_map(|tier| self.map(*tier).get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut KnowledgeEntry> {
        for tier in Tier::PRIORITY {
            // Separate lookups keep the borrow checker happy.
            if self.map(tier).contains_key(key) {
                return self.map_mut(tier).get_mut(key);
            }
        }
        None
    }

    pub fn contains(&self, key: &str) -> bool {
        Tier::PRIORITY.iter().any(|tier| self.map(*tier).contains_key(key))
    }

    /// Place an entry in the map matching its own `tier` field.
    pub fn place(&mut self, entry: KnowledgeEntry) {
        self.map_mut(entry.tier).insert(entry.key.clone(), entry);
    }

    /// Remove an entry from whichever tier holds it.
    pub fn take(&mut self, key: &str) -> Option<KnowledgeEntry> {
        for tier in Tier::PRIORITY {
            if let Some(entry) = self.map_mut(tier).remove(key) {
                return Some(entry);
            }
        }
        None
    }

    pub fn counts(&self) -> (usize, usize, usize) {
        (self.core.len(), self.extended.len(), self.temp.len())
    }
}
