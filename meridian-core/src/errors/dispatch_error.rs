/// Dispatch-layer errors for routing and backend invocation.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no confidence cell registered for domain '{domain}' intent '{intent_kind}'")]
    UnknownCell { domain: String, intent_kind: String },

    #[error("all {attempted} candidate backends failed or timed out")]
    AllBackendsUnavailable { attempted: usize },

    #[error("backend '{model}' failed: {reason}")]
    BackendFailure { model: String, reason: String },

    #[error("backend '{model}' timed out after {elapsed_ms}ms")]
    BackendTimeout { model: String, elapsed_ms: u64 },

    #[error("no backends registered")]
    NoBackendsRegistered,
}
