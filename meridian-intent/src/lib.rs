//! # meridian-intent
//!
//! Classifies free-text medical queries into structured intent: the medical
//! domain, the kind of question being asked, and a coarse urgency signal.
//!
//! Classification is keyword-lexicon based. Queries are predominantly
//! Chinese, which has no word boundaries, so matching is substring
//! containment over the raw query text rather than tokenized lookup.
//! A pluggable [`DomainResolver`] can override the keyword verdict with a
//! statistical classifier; the keyword pass always runs first and remains
//! the fallback.

pub mod classifier;
pub mod defaults;
pub mod lexicon;
pub mod resolver;

pub use classifier::IntentClassifier;
pub use lexicon::Lexicon;
pub use resolver::DomainResolver;
