use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::feedback_event::FeedbackEvent;
use super::score::Score;
use super::tier::Tier;
use crate::intent::IntentData;

/// Four-dimension quality evaluation of a cleaned answer.
///
/// `total` is the exact dot product of the sub-scores with the configured
/// weights; tier decisions are deterministic given the sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub professionalism: Score,
    pub completeness: Score,
    pub readability: Score,
    pub safety: Score,
    pub total: Score,
}

/// A stored answer and its full quality lifecycle.
///
/// Owned exclusively by the tiered store; mutated only through its
/// insert/feedback operations, never read-modify-written by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Deterministic blake3 hash of the normalized query text.
    pub key: String,
    /// The query as the user submitted it.
    pub query: String,
    /// Cleaned answer text served to users.
    pub response: String,
    /// Classification of the originating query.
    pub intent: IntentData,
    /// Quality evaluation at insert/refresh time.
    pub evaluation: Evaluation,
    /// Backend that produced the stored response. Explicit feedback for this
    /// entry updates the confidence cell for this model.
    pub model: String,
    /// Append-only feedback history, timestamp-monotone.
    pub feedback: Vec<FeedbackEvent>,
    /// Weighted mean over the feedback history; unset until feedback exists.
    pub aggregate_rating: Option<Score>,
    /// Quality band this entry currently occupies.
    pub tier: Tier,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl KnowledgeEntry {
    /// The rating that governs tier placement: the aggregate feedback
    /// rating once present, otherwise the initial evaluation total.
    pub fn effective_rating(&self) -> Score {
        self.aggregate_rating.unwrap_or(self.evaluation.total)
    }
}

/// Identity equality: entries are equal if they share a key.
impl PartialEq for KnowledgeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
