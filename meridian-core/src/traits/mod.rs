mod backend;
mod cleaner;
mod medium;
mod scorer;

pub use backend::ModelBackend;
pub use cleaner::ResponseCleaner;
pub use medium::DurableMedium;
pub use scorer::DimensionScorer;
