use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use meridian_core::config::{StoreConfig, TierConfig};
use meridian_core::errors::{FeedbackError, MeridianResult, StoreError};
use meridian_core::intent::IntentData;
use meridian_core::knowledge::{Evaluation, FeedbackEvent, KnowledgeEntry, Score, Tier};
use meridian_core::traits::DurableMedium;

use crate::shard::TierShard;

/// The parts of a new or refreshed entry supplied by the pipeline.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub key: String,
    pub query: String,
    pub response: String,
    pub intent: IntentData,
    pub evaluation: Evaluation,
    pub model: String,
}

/// Result of folding one feedback event into an entry.
#[derive(Debug, Clone)]
pub struct FeedbackApplied {
    pub old_tier: Tier,
    /// Post-update snapshot of the entry.
    pub entry: KnowledgeEntry,
}

/// Per-tier entry counts for the status surface.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TierCounts {
    pub core: usize,
    pub extended: usize,
    pub temp: usize,
}

/// Sharded three-tier store. Entries are never hard-deleted and there is
/// no expiry here; retention policy belongs to whoever owns the durable
/// medium.
pub struct TieredStore {
    shards: Vec<Mutex<TierShard>>,
    tiers: TierConfig,
    medium: Option<Arc<dyn DurableMedium>>,
}

impl TieredStore {
    pub fn new(store_config: &StoreConfig, tiers: TierConfig) -> Self {
        let shard_count = store_config.shards.max(1);
        Self {
            shards: (0..shard_count).map(|_| Mutex::new(TierShard::default())).collect(),
            tiers,
            medium: None,
        }
    }

    /// Attach a write-through medium. Every mutation sends the updated
    /// entry; a medium failure is logged, never propagated — the in-memory
    /// state is authoritative.
    pub fn with_medium(mut self, medium: Arc<dyn DurableMedium>) -> Self {
        self.medium = Some(medium);
        self
    }

    fn shard(&self, key: &str) -> MutexGuard<'_, TierShard> {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        let index = (hasher.finish() as usize) % self.shards.len();
        // A poisoned shard means a panic mid-mutation; the data is still
        // consistent because every mutation completes before unlock.
        match self.shards[index].lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Insert a fresh entry or refresh an existing one.
    ///
    /// Fresh: tier comes from the evaluation total against the thresholds.
    /// Refresh: response, evaluation, and model are replaced; the feedback
    /// history and aggregate rating are kept, and the tier is re-derived
    /// only while no rating exists — once feedback owns the rating, it owns
    /// the tier as well.
    pub async fn insert(&self, draft: EntryDraft) -> MeridianResult<String> {
        let now = Utc::now();
        let key = draft.key.clone();
        let snapshot = {
            let mut shard = self.shard(&key);
            match shard.take(&key) {
                Some(mut entry) => {
                    entry.response = draft.response;
                    entry.evaluation = draft.evaluation;
                    entry.model = draft.model;
                    if entry.aggregate_rating.is_none() {
                        entry.tier = Tier::for_score(entry.evaluation.total, &self.tiers);
                    }
                    entry.updated_at = now;
                    debug!(key = %key, tier = %entry.tier, "entry refreshed");
                    let snapshot = entry.clone();
                    shard.place(entry);
                    snapshot
                }
                None => {
                    let tier = Tier::for_score(draft.evaluation.total, &self.tiers);
                    let entry = KnowledgeEntry {
                        key: key.clone(),
                        query: draft.query,
                        response: draft.response,
                        intent: draft.intent,
                        evaluation: draft.evaluation,
                        model: draft.model,
                        feedback: Vec::new(),
                        aggregate_rating: None,
                        tier,
                        created_at: now,
                        updated_at: now,
                    };
                    info!(key = %key, tier = %tier, total = %entry.evaluation.total, "entry stored");
                    let snapshot = entry.clone();
                    shard.place(entry);
                    snapshot
                }
            }
        };
        self.write_through(&snapshot).await;
        Ok(key)
    }

    /// Clone of the entry, whichever tier holds it.
    pub fn get(&self, key: &str) -> Option<KnowledgeEntry> {
        self.shard(key).get(key).cloned()
    }

    /// Append a feedback event and apply at most one tier step.
    ///
    /// `rate` runs under the shard lock against the post-append history and
    /// returns the new aggregate rating. Transition rule per event: rating
    /// at or above the core threshold steps toward Core, rating below the
    /// extended threshold steps toward Temp, anything between steps toward
    /// Extended. A rating change that would warrant two steps takes the
    /// second on the following event.
    pub async fn apply_feedback<F>(
        &self,
        key: &str,
        event: FeedbackEvent,
        rate: F,
    ) -> MeridianResult<FeedbackApplied>
    where
        F: FnOnce(&[FeedbackEvent]) -> Option<Score>,
    {
        if event.is_empty() {
            return Err(FeedbackError::EmptyEvent.into());
        }

        let applied = {
            let mut shard = self.shard(key);
            let entry = shard.get_mut(key).ok_or_else(|| StoreError::EntryNotFound {
                key: key.to_string(),
            })?;

            if entry.feedback.iter().any(|existing| *existing == event) {
                return Err(FeedbackError::DuplicateEvent {
                    key: key.to_string(),
                }
                .into());
            }
            if let Some(last) = entry.feedback.last() {
                if event.timestamp < last.timestamp {
                    return Err(FeedbackError::OutOfOrder {
                        key: key.to_string(),
                    }
                    .into());
                }
            }

            entry.feedback.push(event);
            let rating = rate(&entry.feedback);
            entry.aggregate_rating = rating;

            let old_tier = entry.tier;
            if let Some(rating) = rating {
                let next = self.step_for(entry.tier, rating);
                if next != entry.tier {
                    debug!(key = %key, from = %entry.tier, to = %next, rating = %rating, "tier transition");
                    entry.tier = next;
                }
            }
            entry.updated_at = Utc::now();

            let snapshot = entry.clone();
            if snapshot.tier != old_tier {
                // Move between tier maps under the same lock.
                if let Some(moved) = shard.take(key) {
                    shard.place(moved);
                }
            }
            FeedbackApplied {
                old_tier,
                entry: snapshot,
            }
        };

        self.write_through(&applied.entry).await;
        Ok(applied)
    }

    /// One tier step implied by the rating. Idempotent at the band's tier.
    fn step_for(&self, current: Tier, rating: Score) -> Tier {
        if rating.value() >= self.tiers.core_threshold {
            current.promoted().unwrap_or(current)
        } else if rating.value() < self.tiers.extended_threshold {
            current.demoted().unwrap_or(current)
        } else {
            match current {
                Tier::Core => Tier::Extended,
                Tier::Temp => Tier::Extended,
                Tier::Extended => Tier::Extended,
            }
        }
    }

    pub fn tier_counts(&self) -> TierCounts {
        let mut totals = TierCounts {
            core: 0,
            extended: 0,
            temp: 0,
        };
        for shard in &self.shards {
            let guard = match shard.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let (core, extended, temp) = guard.counts();
            totals.core += core;
            totals.extended += extended;
            totals.temp += temp;
        }
        totals
    }

    pub fn len(&self) -> usize {
        let counts = self.tier_counts();
        counts.core + counts.extended + counts.temp
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    async fn write_through(&self, entry: &KnowledgeEntry) {
        if let Some(medium) = &self.medium {
            if let Err(err) = medium.persist(entry).await {
                warn!(key = %entry.key, error = %err, "write-through to durable medium failed");
            }
        }
    }
}
