//! The chat pipeline: classify, consult the store, dispatch, clean,
//! evaluate, store, record history.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, Instrument};
use uuid::Uuid;

use meridian_core::config::KeyConfig;
use meridian_core::key::knowledge_key;
use meridian_core::knowledge::Tier;
use meridian_core::traits::ResponseCleaner;
use meridian_core::{IntentData, MeridianResult};
use meridian_dispatch::Dispatcher;
use meridian_eval::QualityEvaluator;
use meridian_intent::IntentClassifier;
use meridian_store::{EntryDraft, TieredStore};

use crate::history::{HistoryLog, HistoryRecord};
use crate::payloads::ResponseMetadata;

/// Source label for an answer served from the core tier.
pub const SOURCE_CACHE: &str = "cache";
/// Source label for a freshly dispatched answer.
pub const SOURCE_MODEL: &str = "model";

/// One pipeline result, ready for the chat envelope.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub response: String,
    pub metadata: ResponseMetadata,
    pub knowledge_id: String,
}

/// Explicitly owned pipeline over the injected collaborators. The server
/// holds exactly one; tests build their own with mock backends.
pub struct ChatService {
    classifier: IntentClassifier,
    dispatcher: Arc<Dispatcher>,
    cleaner: Box<dyn ResponseCleaner>,
    evaluator: QualityEvaluator,
    store: Arc<TieredStore>,
    history: HistoryLog,
    key_config: KeyConfig,
    /// Quality floor for serving a core-tier entry without dispatching.
    cache_serve_threshold: f64,
}

impl ChatService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        classifier: IntentClassifier,
        dispatcher: Arc<Dispatcher>,
        cleaner: Box<dyn ResponseCleaner>,
        evaluator: QualityEvaluator,
        store: Arc<TieredStore>,
        key_config: KeyConfig,
        cache_serve_threshold: f64,
    ) -> Self {
        Self {
            classifier,
            dispatcher,
            cleaner,
            evaluator,
            store,
            history: HistoryLog::new(),
            key_config,
            cache_serve_threshold,
        }
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Answer one query end to end.
    pub async fn chat(
        &self,
        query: &str,
        user_id: &str,
        session_id: Option<String>,
    ) -> MeridianResult<ChatReply> {
        let session = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let span = tracing::info_span!("meridian.chat", user = %user_id, session = %session);
        self.chat_inner(query, user_id).instrument(span).await
    }

    async fn chat_inner(&self, query: &str, user_id: &str) -> MeridianResult<ChatReply> {
        let intent = self.classifier.classify(query)?;
        let key = knowledge_key(query, &self.key_config);

        if let Some(reply) = self.try_cache(&key, &intent) {
            self.record_history(user_id, query, &reply);
            return Ok(reply);
        }

        let answer = self.dispatcher.route(query, &intent).await?;
        let cleaned = self.cleaner.clean(&answer.text, &intent);
        let evaluation = self.evaluator.evaluate(query, &cleaned, &intent);

        let key = self
            .store
            .insert(EntryDraft {
                key,
                query: query.to_string(),
                response: cleaned.clone(),
                intent: intent.clone(),
                evaluation,
                model: answer.model.clone(),
            })
            .await?;

        info!(
            model = %answer.model,
            quality = %evaluation.total,
            key = %key,
            "answer produced"
        );

        let reply = ChatReply {
            response: cleaned,
            metadata: ResponseMetadata::new(&intent, evaluation.total.value(), SOURCE_MODEL),
            knowledge_id: key,
        };
        self.record_history(user_id, query, &reply);
        Ok(reply)
    }

    /// A core-tier entry above the serving threshold answers without a
    /// backend call. Lower tiers always re-dispatch.
    fn try_cache(&self, key: &str, intent: &IntentData) -> Option<ChatReply> {
        let entry = self.store.get(key)?;
        let rating = entry.effective_rating();
        if entry.tier != Tier::Core || rating.value() < self.cache_serve_threshold {
            return None;
        }
        debug!(key = %key, rating = %rating, "serving from core tier");
        Some(ChatReply {
            response: entry.response,
            metadata: ResponseMetadata::new(intent, rating.value(), SOURCE_CACHE),
            knowledge_id: entry.key,
        })
    }

    fn record_history(&self, user_id: &str, query: &str, reply: &ChatReply) {
        self.history.record(
            user_id,
            HistoryRecord {
                query: query.to_string(),
                response: reply.response.clone(),
                metadata: reply.metadata.clone(),
                knowledge_id: reply.knowledge_id.clone(),
                timestamp: Utc::now(),
            },
        );
    }
}
