use meridian_core::config::MatrixConfig;
use meridian_core::errors::DispatchError;
use meridian_core::knowledge::Score;
use meridian_dispatch::ConfidenceMatrix;

fn matrix() -> ConfidenceMatrix {
    ConfidenceMatrix::new(&MatrixConfig::default())
}

fn cell(domain: &str, kind: &str, model: &str) -> (String, String, String) {
    (domain.to_string(), kind.to_string(), model.to_string())
}

#[test]
fn update_on_absent_cell_initializes_to_observed() {
    let m = matrix();
    m.update("tcm", "medication", "zhongjing", Score::new(0.8));
    assert_eq!(
        m.confidence("tcm", "medication", "zhongjing").unwrap().value(),
        0.8
    );
}

#[test]
fn update_on_present_cell_applies_ema() {
    let m = matrix();
    m.update("tcm", "medication", "zhongjing", Score::new(0.5));
    m.update("tcm", "medication", "zhongjing", Score::new(1.0));
    // 0.9 * 0.5 + 0.1 * 1.0
    let got = m.confidence("tcm", "medication", "zhongjing").unwrap().value();
    assert!((got - 0.55).abs() < 1e-12, "got {got}");
}

#[test]
fn custom_smoothing_changes_convergence_speed() {
    let m = ConfidenceMatrix::new(&MatrixConfig { smoothing: 0.5 });
    m.update("tcm", "medication", "zhongjing", Score::new(0.5));
    m.update("tcm", "medication", "zhongjing", Score::new(1.0));
    let got = m.confidence("tcm", "medication", "zhongjing").unwrap().value();
    assert!((got - 0.75).abs() < 1e-12, "got {got}");
}

#[test]
fn best_model_on_empty_cell_is_unknown_cell_error() {
    let m = matrix();
    let err = m.best_model("tcm", "medication").unwrap_err();
    assert!(matches!(err, DispatchError::UnknownCell { .. }));
}

#[test]
fn best_model_returns_highest_confidence() {
    let m = matrix();
    m.seed([
        (cell("tcm", "medication", "zhongjing"), Score::new(0.9)),
        (cell("tcm", "medication", "tcm-chat"), Score::new(0.6)),
        (cell("tcm", "medication", "general-med"), Score::new(0.3)),
        // Different cell, must not leak in.
        (cell("western", "medication", "general-med"), Score::new(0.99)),
    ]);
    let (model, confidence) = m.best_model("tcm", "medication").unwrap();
    assert_eq!(model, "zhongjing");
    assert_eq!(confidence.value(), 0.9);
}

#[test]
fn models_for_sorts_by_confidence_descending() {
    let m = matrix();
    m.seed([
        (cell("tcm", "medication", "general-med"), Score::new(0.3)),
        (cell("tcm", "medication", "zhongjing"), Score::new(0.9)),
        (cell("tcm", "medication", "tcm-chat"), Score::new(0.6)),
    ]);
    let models: Vec<String> = m
        .models_for("tcm", "medication")
        .into_iter()
        .map(|(model, _)| model)
        .collect();
    assert_eq!(models, ["zhongjing", "tcm-chat", "general-med"]);
}

#[test]
fn models_for_breaks_confidence_ties_by_name() {
    let m = matrix();
    m.seed([
        (cell("tcm", "medication", "beta"), Score::new(0.5)),
        (cell("tcm", "medication", "alpha"), Score::new(0.5)),
    ]);
    let models: Vec<String> = m
        .models_for("tcm", "medication")
        .into_iter()
        .map(|(model, _)| model)
        .collect();
    assert_eq!(models, ["alpha", "beta"]);
}

#[test]
fn ema_stays_clamped_under_extreme_observations() {
    let m = matrix();
    m.update("tcm", "medication", "zhongjing", Score::new(1.0));
    for _ in 0..100 {
        m.update("tcm", "medication", "zhongjing", Score::new(1.0));
    }
    let got = m.confidence("tcm", "medication", "zhongjing").unwrap().value();
    assert!(got <= 1.0);
}
