use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::score::Score;

/// Observable user behavior reported as implicit feedback.
/// Each variant carries a fixed score interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplicitBehavior {
    Copy,
    Dwell,
    Share,
    Bookmark,
    FollowRecommendation,
    Ignore,
    Abandon,
}

impl ImplicitBehavior {
    /// Fixed behavior → score mapping.
    pub fn score(self) -> Score {
        let raw = match self {
            ImplicitBehavior::Copy => 0.7,
            ImplicitBehavior::Dwell => 0.6,
            ImplicitBehavior::Share => 0.8,
            ImplicitBehavior::Bookmark => 0.9,
            ImplicitBehavior::FollowRecommendation => 0.8,
            ImplicitBehavior::Ignore => 0.3,
            ImplicitBehavior::Abandon => 0.2,
        };
        Score::new(raw)
    }

    /// Parse the wire label used by the feedback endpoint.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "copy" => Some(ImplicitBehavior::Copy),
            "dwell" => Some(ImplicitBehavior::Dwell),
            "share" => Some(ImplicitBehavior::Share),
            "bookmark" => Some(ImplicitBehavior::Bookmark),
            "follow_recommendation" => Some(ImplicitBehavior::FollowRecommendation),
            "ignore" => Some(ImplicitBehavior::Ignore),
            "abandon" => Some(ImplicitBehavior::Abandon),
            _ => None,
        }
    }
}

/// One feedback observation for a knowledge entry.
///
/// Immutable once appended; the store keeps a per-entry append-only sequence
/// with monotonically non-decreasing timestamps. Any of the three signal
/// fields may be absent; an absent field contributes nothing to the
/// aggregate rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub timestamp: DateTime<Utc>,
    pub explicit_rating: Option<Score>,
    pub implicit_behavior: Option<ImplicitBehavior>,
    pub expert_rating: Option<Score>,
}

impl FeedbackEvent {
    /// An event carrying only an explicit user rating.
    pub fn explicit(timestamp: DateTime<Utc>, rating: Score) -> Self {
        Self {
            timestamp,
            explicit_rating: Some(rating),
            implicit_behavior: None,
            expert_rating: None,
        }
    }

    /// An event carrying only an implicit behavior observation.
    pub fn implicit(timestamp: DateTime<Utc>, behavior: ImplicitBehavior) -> Self {
        Self {
            timestamp,
            explicit_rating: None,
            implicit_behavior: Some(behavior),
            expert_rating: None,
        }
    }

    /// An event carrying only an expert review rating.
    pub fn expert(timestamp: DateTime<Utc>, rating: Score) -> Self {
        Self {
            timestamp,
            explicit_rating: None,
            implicit_behavior: None,
            expert_rating: Some(rating),
        }
    }

    /// True if the event carries no signal at all.
    pub fn is_empty(&self) -> bool {
        self.explicit_rating.is_none()
            && self.implicit_behavior.is_none()
            && self.expert_rating.is_none()
    }
}
