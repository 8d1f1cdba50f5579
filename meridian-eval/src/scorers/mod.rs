//! Built-in heuristic scorers, one file per dimension.

mod completeness;
mod professionalism;
mod readability;
mod safety;

pub use completeness::CompletenessScorer;
pub use professionalism::ProfessionalismScorer;
pub use readability::ReadabilityScorer;
pub use safety::SafetyScorer;

/// Character count, not byte count. Responses are mostly CJK text where
/// the two differ by a factor of three.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
