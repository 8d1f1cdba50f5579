use tracing::{debug, warn};

use meridian_core::intent::IntentData;
use meridian_core::knowledge::{Evaluation, Score};
use meridian_core::traits::DimensionScorer;

use crate::scorers::{
    CompletenessScorer, ProfessionalismScorer, ReadabilityScorer, SafetyScorer,
};

/// Contract weights. They sum to exactly 1.0 and the total is the exact
/// dot product; changing them changes what "quality" means downstream
/// (tier placement, cache serving), so they are constants, not config.
pub const PROFESSIONALISM_WEIGHT: f64 = 0.4;
pub const COMPLETENESS_WEIGHT: f64 = 0.3;
pub const READABILITY_WEIGHT: f64 = 0.2;
pub const SAFETY_WEIGHT: f64 = 0.1;

/// Four scorer slots, one per dimension. Defaults are the built-in
/// heuristics; any slot can be replaced with a model-backed scorer.
pub struct QualityEvaluator {
    professionalism: Box<dyn DimensionScorer>,
    completeness: Box<dyn DimensionScorer>,
    readability: Box<dyn DimensionScorer>,
    safety: Box<dyn DimensionScorer>,
}

impl QualityEvaluator {
    pub fn new() -> Self {
        Self {
            professionalism: Box::new(ProfessionalismScorer),
            completeness: Box::new(CompletenessScorer),
            readability: Box::new(ReadabilityScorer),
            safety: Box::new(SafetyScorer),
        }
    }

    pub fn with_scorers(
        professionalism: Box<dyn DimensionScorer>,
        completeness: Box<dyn DimensionScorer>,
        readability: Box<dyn DimensionScorer>,
        safety: Box<dyn DimensionScorer>,
    ) -> Self {
        Self {
            professionalism,
            completeness,
            readability,
            safety,
        }
    }

    /// Evaluate a cleaned response against the query and its intent.
    pub fn evaluate(&self, query: &str, response: &str, intent: &IntentData) -> Evaluation {
        let professionalism = self.run(self.professionalism.as_ref(), query, response, intent);
        let completeness = self.run(self.completeness.as_ref(), query, response, intent);
        let readability = self.run(self.readability.as_ref(), query, response, intent);
        let safety = self.run(self.safety.as_ref(), query, response, intent);

        let total = Score::new(
            professionalism.value() * PROFESSIONALISM_WEIGHT
                + completeness.value() * COMPLETENESS_WEIGHT
                + readability.value() * READABILITY_WEIGHT
                + safety.value() * SAFETY_WEIGHT,
        );

        debug!(
            professionalism = %professionalism,
            completeness = %completeness,
            readability = %readability,
            safety = %safety,
            total = %total,
            "response evaluated"
        );

        Evaluation {
            professionalism,
            completeness,
            readability,
            safety,
            total,
        }
    }

    /// Run one scorer, clamping out-of-range output and logging the
    /// anomaly. A misbehaving scorer degrades the score, never the request.
    fn run(
        &self,
        scorer: &dyn DimensionScorer,
        query: &str,
        response: &str,
        intent: &IntentData,
    ) -> Score {
        let raw = scorer.score(query, response, intent);
        if !Score::is_in_range(raw) {
            warn!(
                dimension = scorer.dimension(),
                raw, "dimension score out of range, clamping"
            );
        }
        Score::new(raw)
    }
}

impl Default for QualityEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
