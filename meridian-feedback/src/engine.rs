use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, Instrument};

use meridian_core::config::FeedbackConfig;
use meridian_core::errors::{FeedbackError, MeridianError, MeridianResult, StoreError};
use meridian_core::knowledge::{FeedbackEvent, Score, Tier};
use meridian_dispatch::ConfidenceMatrix;
use meridian_store::TieredStore;

/// What one submission did, for logging and the API response.
#[derive(Debug, Clone)]
pub struct FeedbackOutcome {
    pub rating: Option<Score>,
    pub old_tier: Tier,
    pub new_tier: Tier,
}

/// Running submission counters for the status surface.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeedbackTotals {
    pub submitted: u64,
    pub explicit: u64,
    pub implicit: u64,
    pub expert: u64,
}

/// Folds feedback into the store and routes explicit ratings back into the
/// confidence matrix.
pub struct FeedbackEngine {
    store: Arc<TieredStore>,
    matrix: Arc<ConfidenceMatrix>,
    weights: FeedbackConfig,
    submitted: AtomicU64,
    explicit: AtomicU64,
    implicit: AtomicU64,
    expert: AtomicU64,
}

impl FeedbackEngine {
    pub fn new(
        store: Arc<TieredStore>,
        matrix: Arc<ConfidenceMatrix>,
        weights: FeedbackConfig,
    ) -> Self {
        Self {
            store,
            matrix,
            weights,
            submitted: AtomicU64::new(0),
            explicit: AtomicU64::new(0),
            implicit: AtomicU64::new(0),
            expert: AtomicU64::new(0),
        }
    }

    /// Fold one event into the entry behind `key`.
    ///
    /// The aggregate rating is recomputed over the full history under the
    /// store's shard lock, the entry takes at most one tier step, and an
    /// explicit rating additionally reweights the matrix cell the entry
    /// was produced through. Unknown keys are rejected with no mutation.
    pub async fn submit(&self, key: &str, event: FeedbackEvent) -> MeridianResult<FeedbackOutcome> {
        let span = tracing::info_span!("meridian.feedback", key = %key);
        self.submit_inner(key, event).instrument(span).await
    }

    async fn submit_inner(
        &self,
        key: &str,
        event: FeedbackEvent,
    ) -> MeridianResult<FeedbackOutcome> {
        let explicit_rating = event.explicit_rating;
        let had_implicit = event.implicit_behavior.is_some();
        let had_expert = event.expert_rating.is_some();

        let applied = self
            .store
            .apply_feedback(key, event, |history| {
                crate::aggregate::aggregate_rating(history, &self.weights)
            })
            .await
            .map_err(|err| match err {
                MeridianError::Store(StoreError::EntryNotFound { key }) => {
                    FeedbackError::TargetNotFound { key }.into()
                }
                other => other,
            })?;

        self.submitted.fetch_add(1, Ordering::Relaxed);
        if explicit_rating.is_some() {
            self.explicit.fetch_add(1, Ordering::Relaxed);
        }
        if had_implicit {
            self.implicit.fetch_add(1, Ordering::Relaxed);
        }
        if had_expert {
            self.expert.fetch_add(1, Ordering::Relaxed);
        }

        if let Some(observed) = explicit_rating {
            self.matrix.update(
                &applied.entry.intent.domain,
                &applied.entry.intent.intent_kind,
                &applied.entry.model,
                observed,
            );
        }

        let outcome = FeedbackOutcome {
            rating: applied.entry.aggregate_rating,
            old_tier: applied.old_tier,
            new_tier: applied.entry.tier,
        };
        info!(
            rating = ?outcome.rating.map(|r| r.value()),
            old_tier = %outcome.old_tier,
            new_tier = %outcome.new_tier,
            "feedback folded"
        );
        Ok(outcome)
    }

    pub fn totals(&self) -> FeedbackTotals {
        FeedbackTotals {
            submitted: self.submitted.load(Ordering::Relaxed),
            explicit: self.explicit.load(Ordering::Relaxed),
            implicit: self.implicit.load(Ordering::Relaxed),
            expert: self.expert.load(Ordering::Relaxed),
        }
    }
}
