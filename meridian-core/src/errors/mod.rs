mod dispatch_error;
mod feedback_error;
mod intent_error;
mod store_error;

pub use dispatch_error::DispatchError;
pub use feedback_error::FeedbackError;
pub use intent_error::IntentError;
pub use store_error::StoreError;

/// Top-level error for all Meridian subsystems.
#[derive(Debug, thiserror::Error)]
pub enum MeridianError {
    #[error(transparent)]
    Intent(#[from] IntentError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

pub type MeridianResult<T> = Result<T, MeridianError>;
