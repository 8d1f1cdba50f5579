use std::sync::Arc;

use chrono::{Duration, Utc};
use meridian_core::config::{StoreConfig, TierConfig};
use meridian_core::errors::{FeedbackError, MeridianError, StoreError};
use meridian_core::intent::{IntentData, Urgency};
use meridian_core::knowledge::{Evaluation, FeedbackEvent, ImplicitBehavior, Score, Tier};
use meridian_store::{EntryDraft, InMemoryMedium, TieredStore};

fn evaluation(total: f64) -> Evaluation {
    Evaluation {
        professionalism: Score::new(total),
        completeness: Score::new(total),
        readability: Score::new(total),
        safety: Score::new(total),
        total: Score::new(total),
    }
}

fn draft(key: &str, total: f64) -> EntryDraft {
    EntryDraft {
        key: key.to_string(),
        query: "什么是高血压".to_string(),
        response: "高血压是一种慢性疾病。".to_string(),
        intent: IntentData::new("western", "diagnosis", Urgency::Routine),
        evaluation: evaluation(total),
        model: "general-med".to_string(),
    }
}

fn store() -> TieredStore {
    TieredStore::new(&StoreConfig::default(), TierConfig::default())
}

// ── Insert and lookup ────────────────────────────────────────────────────

#[tokio::test]
async fn insert_places_entry_by_evaluation_total() {
    let store = store();
    store.insert(draft("k-core", 0.96)).await.unwrap();
    store.insert(draft("k-ext", 0.85)).await.unwrap();
    store.insert(draft("k-temp", 0.50)).await.unwrap();

    assert_eq!(store.get("k-core").unwrap().tier, Tier::Core);
    assert_eq!(store.get("k-ext").unwrap().tier, Tier::Extended);
    assert_eq!(store.get("k-temp").unwrap().tier, Tier::Temp);

    let counts = store.tier_counts();
    assert_eq!((counts.core, counts.extended, counts.temp), (1, 1, 1));
}

#[tokio::test]
async fn threshold_boundaries_are_inclusive() {
    let store = store();
    store.insert(draft("at-core", 0.95)).await.unwrap();
    store.insert(draft("at-ext", 0.80)).await.unwrap();
    assert_eq!(store.get("at-core").unwrap().tier, Tier::Core);
    assert_eq!(store.get("at-ext").unwrap().tier, Tier::Extended);
}

#[tokio::test]
async fn get_on_unknown_key_is_none() {
    assert!(store().get("missing").is_none());
}

#[tokio::test]
async fn refresh_keeps_feedback_history_and_rating() {
    let store = store();
    store.insert(draft("k", 0.85)).await.unwrap();
    store
        .apply_feedback("k", FeedbackEvent::explicit(Utc::now(), Score::new(0.9)), |_| {
            Some(Score::new(0.9))
        })
        .await
        .unwrap();

    // Refresh with a much better evaluation; rating exists, so the tier
    // must not jump to Core off the evaluation alone.
    store.insert(draft("k", 0.99)).await.unwrap();
    let entry = store.get("k").unwrap();
    assert_eq!(entry.feedback.len(), 1);
    assert_eq!(entry.aggregate_rating.unwrap().value(), 0.9);
    assert_eq!(entry.tier, Tier::Extended);
    assert_eq!(entry.evaluation.total.value(), 0.99);
}

#[tokio::test]
async fn refresh_without_rating_re_tiers_from_evaluation() {
    let store = store();
    store.insert(draft("k", 0.5)).await.unwrap();
    store.insert(draft("k", 0.96)).await.unwrap();
    assert_eq!(store.get("k").unwrap().tier, Tier::Core);
    assert_eq!(store.len(), 1);
}

// ── Feedback-driven transitions ──────────────────────────────────────────

#[tokio::test]
async fn mid_band_rating_steps_temp_toward_extended() {
    let store = store();
    store.insert(draft("k", 0.5)).await.unwrap();
    let applied = store
        .apply_feedback("k", FeedbackEvent::explicit(Utc::now(), Score::new(0.82)), |_| {
            Some(Score::new(0.82))
        })
        .await
        .unwrap();
    assert_eq!(applied.old_tier, Tier::Temp);
    assert_eq!(applied.entry.tier, Tier::Extended);
}

#[tokio::test]
async fn high_rating_from_temp_takes_one_step_not_two() {
    let store = store();
    store.insert(draft("k", 0.5)).await.unwrap();
    store
        .apply_feedback("k", FeedbackEvent::explicit(Utc::now(), Score::new(0.99)), |_| {
            Some(Score::new(0.99))
        })
        .await
        .unwrap();
    // One step now, the next on the following event.
    assert_eq!(store.get("k").unwrap().tier, Tier::Extended);

    store
        .apply_feedback(
            "k",
            FeedbackEvent::explicit(Utc::now() + Duration::seconds(1), Score::new(0.99)),
            |_| Some(Score::new(0.99)),
        )
        .await
        .unwrap();
    assert_eq!(store.get("k").unwrap().tier, Tier::Core);
}

#[tokio::test]
async fn core_demotes_one_step_on_mid_band_rating() {
    let store = store();
    store.insert(draft("k", 0.96)).await.unwrap();
    store
        .apply_feedback("k", FeedbackEvent::explicit(Utc::now(), Score::new(0.85)), |_| {
            Some(Score::new(0.85))
        })
        .await
        .unwrap();
    assert_eq!(store.get("k").unwrap().tier, Tier::Extended);
}

#[tokio::test]
async fn low_rating_steps_down_toward_temp() {
    let store = store();
    store.insert(draft("k", 0.85)).await.unwrap();
    store
        .apply_feedback("k", FeedbackEvent::explicit(Utc::now(), Score::new(0.3)), |_| {
            Some(Score::new(0.3))
        })
        .await
        .unwrap();
    assert_eq!(store.get("k").unwrap().tier, Tier::Temp);

    let counts = store.tier_counts();
    assert_eq!((counts.core, counts.extended, counts.temp), (0, 0, 1));
}

#[tokio::test]
async fn extended_band_rating_keeps_extended_in_place() {
    let store = store();
    store.insert(draft("k", 0.85)).await.unwrap();
    store
        .apply_feedback("k", FeedbackEvent::explicit(Utc::now(), Score::new(0.85)), |_| {
            Some(Score::new(0.85))
        })
        .await
        .unwrap();
    assert_eq!(store.get("k").unwrap().tier, Tier::Extended);
}

// ── Feedback validation ──────────────────────────────────────────────────

#[tokio::test]
async fn feedback_for_unknown_key_is_entry_not_found() {
    let store = store();
    let err = store
        .apply_feedback("ghost", FeedbackEvent::explicit(Utc::now(), Score::new(0.9)), |_| {
            Some(Score::new(0.9))
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MeridianError::Store(StoreError::EntryNotFound { .. })
    ));
}

#[tokio::test]
async fn exact_duplicate_event_is_rejected_without_mutation() {
    let store = store();
    store.insert(draft("k", 0.85)).await.unwrap();
    let event = FeedbackEvent::implicit(Utc::now(), ImplicitBehavior::Bookmark);

    store
        .apply_feedback("k", event.clone(), |_| Some(Score::new(0.9)))
        .await
        .unwrap();
    let err = store
        .apply_feedback("k", event, |_| Some(Score::new(0.9)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MeridianError::Feedback(FeedbackError::DuplicateEvent { .. })
    ));
    assert_eq!(store.get("k").unwrap().feedback.len(), 1);
}

#[tokio::test]
async fn same_content_distinct_timestamp_events_both_fold() {
    let store = store();
    store.insert(draft("k", 0.85)).await.unwrap();
    let now = Utc::now();
    store
        .apply_feedback(
            "k",
            FeedbackEvent::implicit(now, ImplicitBehavior::Share),
            |_| Some(Score::new(0.8)),
        )
        .await
        .unwrap();
    store
        .apply_feedback(
            "k",
            FeedbackEvent::implicit(now + Duration::seconds(5), ImplicitBehavior::Share),
            |_| Some(Score::new(0.8)),
        )
        .await
        .unwrap();
    assert_eq!(store.get("k").unwrap().feedback.len(), 2);
}

#[tokio::test]
async fn timestamp_regression_is_rejected() {
    let store = store();
    store.insert(draft("k", 0.85)).await.unwrap();
    let now = Utc::now();
    store
        .apply_feedback("k", FeedbackEvent::explicit(now, Score::new(0.9)), |_| {
            Some(Score::new(0.9))
        })
        .await
        .unwrap();
    let err = store
        .apply_feedback(
            "k",
            FeedbackEvent::explicit(now - Duration::seconds(10), Score::new(0.4)),
            |_| Some(Score::new(0.4)),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MeridianError::Feedback(FeedbackError::OutOfOrder { .. })
    ));
    assert_eq!(store.get("k").unwrap().feedback.len(), 1);
}

#[tokio::test]
async fn empty_event_is_rejected() {
    let store = store();
    store.insert(draft("k", 0.85)).await.unwrap();
    let empty = FeedbackEvent {
        timestamp: Utc::now(),
        explicit_rating: None,
        implicit_behavior: None,
        expert_rating: None,
    };
    let err = store
        .apply_feedback("k", empty, |_| None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MeridianError::Feedback(FeedbackError::EmptyEvent)
    ));
}

// ── Write-through ────────────────────────────────────────────────────────

#[tokio::test]
async fn every_mutation_reaches_the_durable_medium() {
    let medium = Arc::new(InMemoryMedium::new());
    let store = TieredStore::new(&StoreConfig::default(), TierConfig::default())
        .with_medium(Arc::clone(&medium) as Arc<dyn meridian_core::traits::DurableMedium>);

    store.insert(draft("k", 0.85)).await.unwrap();
    let persisted = medium.load("k").unwrap();
    assert_eq!(persisted.tier, Tier::Extended);

    store
        .apply_feedback("k", FeedbackEvent::explicit(Utc::now(), Score::new(0.97)), |_| {
            Some(Score::new(0.97))
        })
        .await
        .unwrap();
    let persisted = medium.load("k").unwrap();
    assert_eq!(persisted.tier, Tier::Core);
    assert_eq!(persisted.feedback.len(), 1);
}
