//! # meridian-core
//!
//! Foundation crate for the Meridian medical Q&A dispatch core.
//! Defines all shared types, traits, errors, config, and key derivation.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod key;
pub mod knowledge;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MeridianConfig;
pub use errors::{MeridianError, MeridianResult};
pub use intent::{IntentData, Urgency};
pub use knowledge::{Evaluation, FeedbackEvent, ImplicitBehavior, KnowledgeEntry, Score, Tier};
pub use models::CandidateAnswer;
