/// Feedback-aggregation errors. Feedback for an unknown key is rejected,
/// never queued; the store is left untouched on every error path.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("feedback target not found: no entry for key '{key}'")]
    TargetNotFound { key: String },

    #[error("duplicate feedback event for key '{key}'")]
    DuplicateEvent { key: String },

    #[error("feedback event for key '{key}' is older than the last recorded event")]
    OutOfOrder { key: String },

    #[error("feedback event carries no signal")]
    EmptyEvent,
}
