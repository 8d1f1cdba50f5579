use crate::intent::IntentData;

/// Post-processing applied to raw model output before evaluation.
pub trait ResponseCleaner: Send + Sync {
    /// Return the cleaned text. Must be a no-op for already-clean input.
    fn clean(&self, raw: &str, intent: &IntentData) -> String;
}
