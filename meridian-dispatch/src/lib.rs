//! # meridian-dispatch
//!
//! Routes classified queries to model backends. A confidence matrix maps
//! `(domain, intent kind, model)` cells to learned confidence scores; the
//! dispatcher invokes the single best backend when confidence is high
//! enough, and otherwise runs a collaborative round over all candidates
//! and fuses the results.

pub mod dispatcher;
pub mod matrix;
pub mod stats;

pub use dispatcher::Dispatcher;
pub use matrix::ConfidenceMatrix;
pub use stats::{BackendStats, StatsSnapshot};
