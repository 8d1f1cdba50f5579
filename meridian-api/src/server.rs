//! Shared application state, router assembly, and the serve loop.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use meridian_core::MeridianConfig;
use meridian_dispatch::{ConfidenceMatrix, Dispatcher};
use meridian_eval::QualityEvaluator;
use meridian_feedback::FeedbackEngine;
use meridian_intent::IntentClassifier;
use meridian_store::{InMemoryMedium, TieredStore};

use crate::backends::{demo_backends, demo_matrix_cells};
use crate::cleaner::DisclaimerCleaner;
use crate::routes;
use crate::service::ChatService;

/// Everything the handlers need, built once at startup.
pub struct AppState {
    pub service: ChatService,
    pub feedback: Arc<FeedbackEngine>,
    pub store: Arc<TieredStore>,
    pub dispatcher: Arc<Dispatcher>,
}

/// Wire up the full pipeline with the demo backends registered and the
/// matrix seeded.
pub fn build_state(config: &MeridianConfig) -> Arc<AppState> {
    let matrix = Arc::new(ConfidenceMatrix::new(&config.matrix));
    matrix.seed(demo_matrix_cells());

    let dispatcher = Arc::new(Dispatcher::new(Arc::clone(&matrix), config.routing.clone()));
    for backend in demo_backends() {
        dispatcher.register(backend);
    }

    let medium = Arc::new(InMemoryMedium::new());
    let store = Arc::new(
        TieredStore::new(&config.store, config.tiers.clone()).with_medium(medium),
    );

    let feedback = Arc::new(FeedbackEngine::new(
        Arc::clone(&store),
        Arc::clone(&matrix),
        config.feedback.clone(),
    ));

    let service = ChatService::new(
        IntentClassifier::new(),
        Arc::clone(&dispatcher),
        Box::new(DisclaimerCleaner::new()),
        QualityEvaluator::new(),
        Arc::clone(&store),
        config.key.clone(),
        config.server.cache_serve_threshold,
    );

    Arc::new(AppState {
        service,
        feedback,
        store,
        dispatcher,
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::chat_routes())
        .merge(routes::feedback_routes())
        .merge(routes::history_routes())
        .merge(routes::status_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind_addr: &str, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!(addr = %bind_addr, "meridian listening");
    axum::serve(listener, router(state)).await
}
