/// Tiered-store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no knowledge entry for key '{key}'")]
    EntryNotFound { key: String },

    #[error("durable medium write failed for key '{key}': {reason}")]
    WriteThroughFailed { key: String, reason: String },
}
