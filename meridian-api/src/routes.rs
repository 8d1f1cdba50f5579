//! Route handlers, grouped per endpoint family.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;

use meridian_core::constants::VERSION;
use meridian_core::knowledge::{FeedbackEvent, ImplicitBehavior, Score};

use crate::payloads::{
    AckResponse, ApiError, ChatRequest, ChatResponse, FeedbackRequest, FeedbackSignal,
    HealthResponse, HistoryQuery, HistoryResponse, StatusResponse,
};
use crate::server::AppState;

pub fn chat_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/chat", post(chat))
}

pub fn feedback_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/feedback", post(feedback))
}

pub fn history_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/history", get(history))
}

pub fn status_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/status", get(status))
        .route("/health", get(health))
}

async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let (query, user_id, session_id) = body.validate()?;
    let reply = state.service.chat(&query, &user_id, session_id).await?;
    Ok(Json(ChatResponse {
        status: "success",
        response: reply.response,
        metadata: reply.metadata,
        knowledge_id: reply.knowledge_id,
    }))
}

async fn feedback(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FeedbackRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    let submission = body.validate()?;
    let event = match submission.signal {
        FeedbackSignal::Explicit { score, .. } => {
            if !Score::is_in_range(score) {
                return Err(ApiError::bad_request(format!(
                    "score {score} is outside [0.0, 1.0]"
                )));
            }
            FeedbackEvent::explicit(Utc::now(), Score::new(score))
        }
        FeedbackSignal::Implicit { behavior } => {
            let behavior = ImplicitBehavior::from_label(&behavior).ok_or_else(|| {
                ApiError::bad_request(format!("unknown behavior '{behavior}'"))
            })?;
            FeedbackEvent::implicit(Utc::now(), behavior)
        }
    };
    state.feedback.submit(&submission.knowledge_id, event).await?;
    Ok(Json(AckResponse::success()))
}

async fn history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let user_id = params
        .user_id
        .ok_or_else(|| ApiError::missing_field("user_id"))?;
    Ok(Json(HistoryResponse {
        status: "success",
        history: state.service.history().for_user(&user_id),
    }))
}

async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "success",
        tiers: state.store.tier_counts(),
        backends: state.dispatcher.stats_snapshot(),
        feedback: state.feedback.totals(),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: VERSION,
    })
}
