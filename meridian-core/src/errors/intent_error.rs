/// Intent-classification errors.
#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    #[error("invalid query: empty or whitespace-only input")]
    InvalidQuery,
}
