//! # meridian-feedback
//!
//! Folds user, behavioral, and expert feedback into each entry's aggregate
//! rating, triggers tier transitions in the store, and feeds explicit
//! ratings back into the routing confidence matrix.

pub mod aggregate;
pub mod engine;

pub use aggregate::aggregate_rating;
pub use engine::{FeedbackEngine, FeedbackOutcome, FeedbackTotals};
