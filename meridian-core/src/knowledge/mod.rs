pub mod entry;
pub mod feedback_event;
pub mod score;
pub mod tier;

pub use entry::{Evaluation, KnowledgeEntry};
pub use feedback_event::{FeedbackEvent, ImplicitBehavior};
pub use score::Score;
pub use tier::Tier;
