use crate::intent::IntentData;

/// Scores one quality dimension of a candidate answer.
///
/// Implementations return a raw value expected in `[0, 1]`. The evaluator
/// clamps out-of-range values and logs them as data-quality anomalies
/// rather than failing the evaluation.
pub trait DimensionScorer: Send + Sync {
    /// Dimension label, e.g. `"professionalism"`.
    fn dimension(&self) -> &str;

    /// Score the response text for this dimension.
    fn score(&self, query: &str, response: &str, intent: &IntentData) -> f64;
}
