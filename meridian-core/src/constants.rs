/// Meridian system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Domain assigned when no lexicon matches a query.
pub const GENERAL_DOMAIN: &str = "general";

/// Intent kind assigned when no lexicon matches a query.
pub const UNCLASSIFIED_INTENT: &str = "unclassified";

/// Number of quality dimensions combined by the evaluator.
pub const EVALUATION_DIMENSIONS: usize = 4;

/// Maximum history records retained per user by the API layer.
pub const MAX_HISTORY_PER_USER: usize = 200;
