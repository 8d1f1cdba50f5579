use meridian_core::config::TierConfig;
use meridian_core::knowledge::{Score, Tier};
use proptest::prelude::*;

// ── Score stays within bounds under construction and arithmetic ─────────

proptest! {
    #[test]
    fn score_new_always_bounded(raw in -1e6f64..1e6) {
        let s = Score::new(raw);
        prop_assert!((0.0..=1.0).contains(&s.value()), "out of bounds: {}", s.value());
    }

    #[test]
    fn score_ops_always_bounded(a in 0.0f64..=1.0, b in 0.0f64..=1.0, k in -10.0f64..10.0) {
        let x = Score::new(a);
        let y = Score::new(b);
        prop_assert!((0.0..=1.0).contains(&(x + y).value()));
        prop_assert!((0.0..=1.0).contains(&(x - y).value()));
        prop_assert!((0.0..=1.0).contains(&(x * k).value()));
    }
}

// ── Tier placement is total and consistent with thresholds ──────────────

proptest! {
    #[test]
    fn tier_for_score_is_total_and_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let config = TierConfig::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let tier_lo = Tier::for_score(Score::new(lo), &config);
        let tier_hi = Tier::for_score(Score::new(hi), &config);
        prop_assert!(tier_lo <= tier_hi, "higher score placed lower: {lo} -> {tier_lo}, {hi} -> {tier_hi}");
    }
}
