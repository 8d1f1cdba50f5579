//! Minimal per-user answer history for the boundary.
//!
//! Session bookkeeping proper lives outside this service; this keeps just
//! enough for the history endpoint, capped per user.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;

use meridian_core::constants::MAX_HISTORY_PER_USER;

use crate::payloads::ResponseMetadata;

/// One served answer, as the history endpoint returns it.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub query: String,
    pub response: String,
    pub metadata: ResponseMetadata,
    pub knowledge_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Per-user append log, oldest entries evicted past the cap.
#[derive(Debug, Default)]
pub struct HistoryLog {
    records: DashMap<String, Vec<HistoryRecord>>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, user_id: &str, record: HistoryRecord) {
        let mut entries = self.records.entry(user_id.to_string()).or_default();
        entries.push(record);
        if entries.len() > MAX_HISTORY_PER_USER {
            let excess = entries.len() - MAX_HISTORY_PER_USER;
            entries.drain(..excess);
        }
    }

    /// All records for a user, oldest first. Unknown users get an empty
    /// history, not an error.
    pub fn for_user(&self, user_id: &str) -> Vec<HistoryRecord> {
        self.records
            .get(user_id)
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}
