use async_trait::async_trait;

use crate::errors::MeridianResult;
use crate::intent::IntentData;

/// A model capable of answering a medical query.
///
/// Implementations wrap a concrete inference endpoint (local process,
/// remote API, or an in-process heuristic). The dispatch layer treats
/// every backend uniformly through this trait.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Stable identifier used in the confidence matrix and in responses.
    fn name(&self) -> &str;

    /// Produce an answer for the query under the classified intent.
    async fn infer(&self, query: &str, intent: &IntentData) -> MeridianResult<String>;
}
