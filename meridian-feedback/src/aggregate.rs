use meridian_core::config::FeedbackConfig;
use meridian_core::knowledge::{FeedbackEvent, Score};

/// Weighted mean over the whole feedback history.
///
/// Each present field contributes `weight × value` to the numerator and
/// `weight` to the denominator; a missing field contributes neither — the
/// weight is not redistributed to the fields that are present. A history
/// with zero accumulated weight yields no rating.
pub fn aggregate_rating(events: &[FeedbackEvent], weights: &FeedbackConfig) -> Option<Score> {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for event in events {
        if let Some(rating) = event.explicit_rating {
            numerator += weights.explicit_weight * rating.value();
            denominator += weights.explicit_weight;
        }
        if let Some(behavior) = event.implicit_behavior {
            numerator += weights.implicit_weight * behavior.score().value();
            denominator += weights.implicit_weight;
        }
        if let Some(rating) = event.expert_rating {
            numerator += weights.expert_weight * rating.value();
            denominator += weights.expert_weight;
        }
    }
    if denominator == 0.0 {
        None
    } else {
        Some(Score::new(numerator / denominator))
    }
}
