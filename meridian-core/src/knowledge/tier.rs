use serde::{Deserialize, Serialize};
use std::fmt;

use super::score::Score;
use crate::config::TierConfig;

/// Quality band a stored answer occupies. Ordered: Temp < Extended < Core.
/// Drives lookup priority and implies a confidence floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Temp,
    Extended,
    Core,
}

impl Tier {
    /// Lookup order: highest-quality tier first.
    pub const PRIORITY: [Tier; 3] = [Tier::Core, Tier::Extended, Tier::Temp];

    /// The adjacent tier one step up, if any.
    pub fn promoted(self) -> Option<Tier> {
        match self {
            Tier::Temp => Some(Tier::Extended),
            Tier::Extended => Some(Tier::Core),
            Tier::Core => None,
        }
    }

    /// The adjacent tier one step down, if any.
    pub fn demoted(self) -> Option<Tier> {
        match self {
            Tier::Core => Some(Tier::Extended),
            Tier::Extended => Some(Tier::Temp),
            Tier::Temp => None,
        }
    }

    /// The tier a score maps to against the configured thresholds.
    pub fn for_score(score: Score, config: &TierConfig) -> Tier {
        if score.value() >= config.core_threshold {
            Tier::Core
        } else if score.value() >= config.extended_threshold {
            Tier::Extended
        } else {
            Tier::Temp
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Core => "core",
            Tier::Extended => "extended",
            Tier::Temp => "temp",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
