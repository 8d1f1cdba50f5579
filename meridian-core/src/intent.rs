use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse ordinal urgency derived from marker keywords. Advisory only:
/// the core annotates but never gates or blocks a response on urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Routine,
    Elevated,
    Emergency,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Routine => "routine",
            Urgency::Elevated => "elevated",
            Urgency::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a raw query. All fields are always populated:
/// unmatched queries get the designated fallback values, never an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentData {
    pub domain: String,
    pub intent_kind: String,
    pub urgency: Urgency,
}

impl IntentData {
    pub fn new(domain: impl Into<String>, intent_kind: impl Into<String>, urgency: Urgency) -> Self {
        Self {
            domain: domain.into(),
            intent_kind: intent_kind.into(),
            urgency,
        }
    }
}
