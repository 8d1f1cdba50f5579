use meridian_core::errors::*;

#[test]
fn dispatch_error_unknown_cell_carries_domain_and_intent() {
    let err = DispatchError::UnknownCell {
        domain: "internal_medicine".into(),
        intent_kind: "diagnosis".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("internal_medicine"));
    assert!(msg.contains("diagnosis"));
}

#[test]
fn dispatch_error_timeout_carries_model_and_elapsed() {
    let err = DispatchError::BackendTimeout {
        model: "zhongjing".into(),
        elapsed_ms: 8_000,
    };
    let msg = err.to_string();
    assert!(msg.contains("zhongjing"));
    assert!(msg.contains("8000"));
}

#[test]
fn store_error_entry_not_found_carries_key() {
    let err = StoreError::EntryNotFound {
        key: "abc123".into(),
    };
    assert!(err.to_string().contains("abc123"));
}

#[test]
fn feedback_error_out_of_order_carries_key() {
    let err = FeedbackError::OutOfOrder { key: "k-9".into() };
    assert!(err.to_string().contains("k-9"));
}

// --- From impls ---

#[test]
fn intent_error_converts_to_meridian_error() {
    let err: MeridianError = IntentError::InvalidQuery.into();
    assert!(matches!(err, MeridianError::Intent(_)));
}

#[test]
fn dispatch_error_converts_to_meridian_error() {
    let err: MeridianError = DispatchError::NoBackendsRegistered.into();
    assert!(matches!(err, MeridianError::Dispatch(_)));
}

#[test]
fn store_error_converts_to_meridian_error() {
    let store_err = StoreError::WriteThroughFailed {
        key: "k".into(),
        reason: "disk full".into(),
    };
    let err: MeridianError = store_err.into();
    assert!(matches!(err, MeridianError::Store(_)));
}

#[test]
fn feedback_error_converts_to_meridian_error() {
    let err: MeridianError = FeedbackError::EmptyEvent.into();
    assert!(matches!(err, MeridianError::Feedback(_)));
}

#[test]
fn serde_json_error_converts_to_meridian_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: MeridianError = json_err.into();
    assert!(matches!(err, MeridianError::Serialization(_)));
}
