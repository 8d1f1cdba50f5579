use serde::{Deserialize, Serialize};

use crate::knowledge::Score;

/// One backend's answer in a collaborative inference round, tagged with
/// the matrix confidence the router held for that backend at dispatch
/// time. Fusion picks the candidate with the highest confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateAnswer {
    pub model: String,
    pub text: String,
    pub confidence: Score,
}

impl CandidateAnswer {
    pub fn new(model: impl Into<String>, text: impl Into<String>, confidence: Score) -> Self {
        Self {
            model: model.into(),
            text: text.into(),
            confidence,
        }
    }
}
