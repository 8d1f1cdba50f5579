use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info, warn, Instrument};

use meridian_core::config::RoutingConfig;
use meridian_core::errors::{DispatchError, MeridianResult};
use meridian_core::intent::IntentData;
use meridian_core::knowledge::Score;
use meridian_core::models::CandidateAnswer;
use meridian_core::traits::ModelBackend;

use crate::matrix::ConfidenceMatrix;
use crate::stats::{BackendStats, StatsSnapshot};

/// Routes a classified query to one or several registered backends.
///
/// Single-model path: the best cell at or above the routing threshold is
/// invoked alone. Collaborative path: every candidate runs concurrently in
/// a [`JoinSet`], each call wrapped in its own timeout, and the answer with
/// the highest matrix confidence among the successes wins. A backend
/// failure never aborts its siblings.
pub struct Dispatcher {
    backends: DashMap<String, Arc<dyn ModelBackend>>,
    stats: DashMap<String, BackendStats>,
    matrix: Arc<ConfidenceMatrix>,
    config: RoutingConfig,
}

impl Dispatcher {
    pub fn new(matrix: Arc<ConfidenceMatrix>, config: RoutingConfig) -> Self {
        Self {
            backends: DashMap::new(),
            stats: DashMap::new(),
            matrix,
            config,
        }
    }

    /// Register a backend under its own name.
    pub fn register(&self, backend: Arc<dyn ModelBackend>) {
        let name = backend.name().to_string();
        self.stats.entry(name.clone()).or_default();
        self.backends.insert(name, backend);
    }

    pub fn backend_count(&self) -> usize {
        self.backends.len()
    }

    /// Per-backend accounting, keyed by backend name.
    pub fn stats_snapshot(&self) -> BTreeMap<String, StatsSnapshot> {
        self.stats
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().snapshot()))
            .collect()
    }

    /// Produce one answer for the query, single-model or collaborative.
    pub async fn route(
        &self,
        query: &str,
        intent: &IntentData,
    ) -> MeridianResult<CandidateAnswer> {
        let span = tracing::info_span!(
            "meridian.route",
            domain = %intent.domain,
            intent_kind = %intent.intent_kind,
        );
        self.route_inner(query, intent).instrument(span).await
    }

    async fn route_inner(
        &self,
        query: &str,
        intent: &IntentData,
    ) -> MeridianResult<CandidateAnswer> {
        if self.backends.is_empty() {
            return Err(DispatchError::NoBackendsRegistered.into());
        }

        if let Some((model, confidence)) = self.resolve_cell(intent) {
            if confidence.value() >= self.config.routing_threshold {
                match self.invoke(&model, query, intent).await {
                    Ok(text) => {
                        info!(model = %model, confidence = %confidence, "single-model answer");
                        return Ok(CandidateAnswer::new(model, text, confidence));
                    }
                    // Failure is already recorded; the backend stays in the
                    // collaborative round below.
                    Err(err) => {
                        warn!(model = %model, error = %err, "single-model invocation failed");
                    }
                }
            } else {
                debug!(
                    model = %model,
                    confidence = %confidence,
                    threshold = self.config.routing_threshold,
                    "confidence below threshold, running collaborative round"
                );
            }
        }

        let candidates = self.collaborative_candidates(intent);
        self.collaborate(query, intent, candidates).await
    }

    /// Resolve the best (model, confidence) pair for the intent.
    ///
    /// Misses cascade: exact cell, then the fallback domain, then the
    /// configured fallback model at zero confidence if it is registered.
    /// `None` means the collaborative round runs over the whole registry.
    fn resolve_cell(&self, intent: &IntentData) -> Option<(String, Score)> {
        if let Ok(hit) = self.matrix.best_model(&intent.domain, &intent.intent_kind) {
            return Some(hit);
        }
        if let Ok(hit) = self
            .matrix
            .best_model(&self.config.fallback_domain, &intent.intent_kind)
        {
            debug!(
                domain = %intent.domain,
                fallback = %self.config.fallback_domain,
                "no confidence cell for domain, using fallback domain"
            );
            return Some(hit);
        }
        if self.backends.contains_key(&self.config.fallback_model) {
            debug!(model = %self.config.fallback_model, "no cell resolved, using fallback model");
            return Some((self.config.fallback_model.clone(), Score::new(0.0)));
        }
        None
    }

    /// Candidate set for a collaborative round: the cell's models, then the
    /// fallback domain's, then the whole registry at zero confidence.
    /// Unregistered models are dropped.
    fn collaborative_candidates(&self, intent: &IntentData) -> Vec<(String, Score)> {
        let mut candidates = self.matrix.models_for(&intent.domain, &intent.intent_kind);
        if candidates.is_empty() {
            candidates = self
                .matrix
                .models_for(&self.config.fallback_domain, &intent.intent_kind);
        }
        candidates.retain(|(model, _)| self.backends.contains_key(model));
        if candidates.is_empty() {
            candidates = self
                .backends
                .iter()
                .map(|backend| (backend.key().clone(), Score::new(0.0)))
                .collect();
            candidates.sort_by(|a, b| a.0.cmp(&b.0));
        }
        candidates
    }

    async fn collaborate(
        &self,
        query: &str,
        intent: &IntentData,
        candidates: Vec<(String, Score)>,
    ) -> MeridianResult<CandidateAnswer> {
        let attempted = candidates.len();
        let deadline = Duration::from_millis(self.config.per_backend_timeout_ms);

        let mut round = JoinSet::new();
        for (model, confidence) in candidates {
            let Some(backend) = self.backends.get(&model).map(|b| Arc::clone(b.value())) else {
                continue;
            };
            let query = query.to_string();
            let intent = intent.clone();
            round.spawn(async move {
                let started = Instant::now();
                let outcome = timeout(deadline, backend.infer(&query, &intent)).await;
                (model, confidence, started.elapsed(), outcome)
            });
        }

        let mut best: Option<CandidateAnswer> = None;
        while let Some(joined) = round.join_next().await {
            let Ok((model, confidence, elapsed, outcome)) = joined else {
                continue;
            };
            let latency_ms = elapsed.as_millis() as u64;
            match outcome {
                Ok(Ok(text)) => {
                    self.record(&model, latency_ms, true);
                    let replace = best
                        .as_ref()
                        .map_or(true, |current| confidence > current.confidence);
                    if replace {
                        best = Some(CandidateAnswer::new(model, text, confidence));
                    }
                }
                Ok(Err(err)) => {
                    self.record(&model, latency_ms, false);
                    warn!(model = %model, error = %err, "backend failed in collaborative round");
                }
                Err(_) => {
                    self.record(&model, latency_ms, false);
                    warn!(model = %model, elapsed_ms = latency_ms, "backend timed out in collaborative round");
                }
            }
        }

        match best {
            Some(answer) => {
                info!(model = %answer.model, confidence = %answer.confidence, "collaborative answer fused");
                Ok(answer)
            }
            None => Err(DispatchError::AllBackendsUnavailable { attempted }.into()),
        }
    }

    /// Invoke one backend with the per-backend timeout, recording stats.
    async fn invoke(&self, model: &str, query: &str, intent: &IntentData) -> MeridianResult<String> {
        let backend = self
            .backends
            .get(model)
            .map(|b| Arc::clone(b.value()))
            .ok_or_else(|| DispatchError::BackendFailure {
                model: model.to_string(),
                reason: "not registered".to_string(),
            })?;
        let deadline = Duration::from_millis(self.config.per_backend_timeout_ms);
        let started = Instant::now();
        let outcome = timeout(deadline, backend.infer(query, intent)).await;
        let latency_ms = started.elapsed().as_millis() as u64;
        match outcome {
            Ok(Ok(text)) => {
                self.record(model, latency_ms, true);
                Ok(text)
            }
            Ok(Err(err)) => {
                self.record(model, latency_ms, false);
                Err(DispatchError::BackendFailure {
                    model: model.to_string(),
                    reason: err.to_string(),
                }
                .into())
            }
            Err(_) => {
                self.record(model, latency_ms, false);
                Err(DispatchError::BackendTimeout {
                    model: model.to_string(),
                    elapsed_ms: latency_ms,
                }
                .into())
            }
        }
    }

    fn record(&self, model: &str, latency_ms: u64, success: bool) {
        let mut stats = self.stats.entry(model.to_string()).or_default();
        if success {
            stats.record_success(latency_ms);
        } else {
            stats.record_failure(latency_ms);
        }
    }
}
