use meridian_core::errors::{IntentError, MeridianError};
use meridian_core::intent::Urgency;
use meridian_intent::{DomainResolver, IntentClassifier, Lexicon};

// ── Domain classification ────────────────────────────────────────────────

#[test]
fn tcm_query_classifies_into_tcm_domain() {
    let classifier = IntentClassifier::new();
    let intent = classifier.classify("请问太极拳对调理气血有什么好处？").unwrap();
    assert_eq!(intent.domain, "tcm");
}

#[test]
fn western_query_classifies_into_western_domain() {
    let classifier = IntentClassifier::new();
    let intent = classifier.classify("血常规和心电图检查需要空腹吗").unwrap();
    assert_eq!(intent.domain, "western");
}

#[test]
fn unmatched_query_falls_back_to_general_domain() {
    let classifier = IntentClassifier::new();
    let intent = classifier.classify("我最近咳嗽还有点发烧").unwrap();
    assert_eq!(intent.domain, "general");
}

#[test]
fn domain_tie_breaks_by_registration_order() {
    // One keyword from tcm ("经络") and one from western ("化验"):
    // equal match counts, tcm registered first.
    let classifier = IntentClassifier::new();
    let intent = classifier.classify("经络方面需要做化验吗").unwrap();
    assert_eq!(intent.domain, "tcm");
}

#[test]
fn higher_match_count_beats_registration_order() {
    // Two western keywords ("手术", "输液") against one tcm keyword ("中药").
    let classifier = IntentClassifier::new();
    let intent = classifier.classify("手术后输液期间能喝中药吗").unwrap();
    assert_eq!(intent.domain, "western");
}

// ── Intent kind classification ───────────────────────────────────────────

#[test]
fn medication_query_classifies_as_medication() {
    let classifier = IntentClassifier::new();
    let intent = classifier.classify("阿莫西林和头孢一起吃有什么副作用？").unwrap();
    assert_eq!(intent.intent_kind, "medication");
}

#[test]
fn treatment_query_classifies_as_treatment() {
    let classifier = IntentClassifier::new();
    let intent = classifier.classify("颈椎病应该怎么治疗").unwrap();
    assert_eq!(intent.intent_kind, "treatment");
}

#[test]
fn unmatched_intent_falls_back_to_unclassified() {
    let classifier = IntentClassifier::new();
    let intent = classifier.classify("人体一共有多少块骨头").unwrap();
    assert_eq!(intent.intent_kind, "unclassified");
}

// ── Urgency ──────────────────────────────────────────────────────────────

#[test]
fn no_marker_yields_routine_urgency() {
    let classifier = IntentClassifier::new();
    let intent = classifier.classify("如何预防感冒").unwrap();
    assert_eq!(intent.urgency, Urgency::Routine);
}

#[test]
fn elevated_marker_yields_elevated_urgency() {
    let classifier = IntentClassifier::new();
    let intent = classifier.classify("头痛反复发作，影响睡眠").unwrap();
    assert_eq!(intent.urgency, Urgency::Elevated);
}

#[test]
fn emergency_marker_outweighs_elevated_markers() {
    let classifier = IntentClassifier::new();
    let intent = classifier
        .classify("我父亲胸痛持续加重，刚刚晕倒了")
        .unwrap();
    assert_eq!(intent.urgency, Urgency::Emergency);
}

// ── Error path ───────────────────────────────────────────────────────────

#[test]
fn empty_query_is_rejected() {
    let classifier = IntentClassifier::new();
    for query in ["", "   ", "\n\t"] {
        let err = classifier.classify(query).unwrap_err();
        assert!(matches!(
            err,
            MeridianError::Intent(IntentError::InvalidQuery)
        ));
    }
}

// ── Resolver override ────────────────────────────────────────────────────

struct PinnedResolver(&'static str);

impl DomainResolver for PinnedResolver {
    fn resolve(&self, _query: &str, _keyword_domain: &str) -> Option<String> {
        Some(self.0.to_string())
    }
}

struct DeferringResolver;

impl DomainResolver for DeferringResolver {
    fn resolve(&self, _query: &str, _keyword_domain: &str) -> Option<String> {
        None
    }
}

#[test]
fn resolver_override_replaces_keyword_verdict() {
    let classifier =
        IntentClassifier::new().with_resolver(Box::new(PinnedResolver("oncology")));
    let intent = classifier.classify("请问太极拳对调理气血有什么好处？").unwrap();
    assert_eq!(intent.domain, "oncology");
}

#[test]
fn deferring_resolver_keeps_keyword_verdict() {
    let classifier = IntentClassifier::new().with_resolver(Box::new(DeferringResolver));
    let intent = classifier.classify("请问太极拳对调理气血有什么好处？").unwrap();
    assert_eq!(intent.domain, "tcm");
}

// ── Custom lexicons ──────────────────────────────────────────────────────

#[test]
fn custom_lexicons_replace_builtins() {
    let classifier = IntentClassifier::with_lexicons(
        vec![Lexicon::new("dermatology", &["皮肤", "湿疹"])],
        vec![Lexicon::new("triage", &["挂哪个科"])],
        vec![],
        vec![],
    );
    let intent = classifier.classify("皮肤湿疹应该挂哪个科").unwrap();
    assert_eq!(intent.domain, "dermatology");
    assert_eq!(intent.intent_kind, "triage");
    assert_eq!(intent.urgency, Urgency::Routine);
}
