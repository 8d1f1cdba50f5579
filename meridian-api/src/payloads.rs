//! Wire envelopes for the HTTP boundary.
//!
//! Request payloads deserialize every field as optional and validate
//! explicitly: a missing required field is an error response, never a
//! silently substituted default.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use meridian_core::errors::{DispatchError, FeedbackError, IntentError, StoreError};
use meridian_core::intent::{IntentData, Urgency};
use meridian_core::MeridianError;

/// Boundary error carrying the HTTP status and the `{status:"error"}`
/// envelope message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::bad_request(format!("missing required field '{field}'"))
    }
}

impl From<MeridianError> for ApiError {
    fn from(err: MeridianError) -> Self {
        let status = match &err {
            MeridianError::Intent(IntentError::InvalidQuery) => StatusCode::BAD_REQUEST,
            MeridianError::Store(StoreError::EntryNotFound { .. })
            | MeridianError::Feedback(FeedbackError::TargetNotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            MeridianError::Feedback(_) => StatusCode::BAD_REQUEST,
            MeridianError::Dispatch(DispatchError::AllBackendsUnavailable { .. })
            | MeridianError::Dispatch(DispatchError::NoBackendsRegistered) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "status": "error", "message": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ── chat ──

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: Option<String>,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
}

impl ChatRequest {
    /// Extract the required fields or report the first one missing.
    pub fn validate(self) -> Result<(String, String, Option<String>), ApiError> {
        let query = self.query.ok_or_else(|| ApiError::missing_field("query"))?;
        let user_id = self
            .user_id
            .ok_or_else(|| ApiError::missing_field("user_id"))?;
        Ok((query, user_id, self.session_id))
    }
}

/// Served-answer annotations echoed on both chat and history responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub domain: String,
    pub intent_kind: String,
    pub urgency: Urgency,
    pub quality_score: f64,
    /// "cache" for a core-tier hit, "model" for a fresh dispatch.
    pub source: String,
}

impl ResponseMetadata {
    pub fn new(intent: &IntentData, quality_score: f64, source: &str) -> Self {
        Self {
            domain: intent.domain.clone(),
            intent_kind: intent.intent_kind.clone(),
            urgency: intent.urgency,
            quality_score,
            source: source.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub status: &'static str,
    pub response: String,
    pub metadata: ResponseMetadata,
    pub knowledge_id: String,
}

// ── feedback ──

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub knowledge_id: Option<String>,
    pub user_id: Option<String>,
    pub score: Option<f64>,
    pub behavior: Option<String>,
    pub comment: Option<String>,
}

/// Validated feedback submission: explicit rating or implicit behavior.
#[derive(Debug)]
pub struct FeedbackSubmission {
    pub knowledge_id: String,
    pub user_id: String,
    pub signal: FeedbackSignal,
}

#[derive(Debug)]
pub enum FeedbackSignal {
    Explicit { score: f64, comment: Option<String> },
    Implicit { behavior: String },
}

impl FeedbackRequest {
    pub fn validate(self) -> Result<FeedbackSubmission, ApiError> {
        let knowledge_id = self
            .knowledge_id
            .ok_or_else(|| ApiError::missing_field("knowledge_id"))?;
        let user_id = self
            .user_id
            .ok_or_else(|| ApiError::missing_field("user_id"))?;
        let signal = match (self.score, self.behavior) {
            (Some(score), None) => FeedbackSignal::Explicit {
                score,
                comment: self.comment,
            },
            (None, Some(behavior)) => FeedbackSignal::Implicit { behavior },
            (Some(_), Some(_)) => {
                return Err(ApiError::bad_request(
                    "provide either 'score' or 'behavior', not both",
                ))
            }
            (None, None) => {
                return Err(ApiError::bad_request(
                    "feedback requires a 'score' or a 'behavior'",
                ))
            }
        };
        Ok(FeedbackSubmission {
            knowledge_id,
            user_id,
            signal,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub status: &'static str,
}

impl AckResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

// ── history / status ──

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub status: &'static str,
    pub history: Vec<crate::history::HistoryRecord>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub tiers: meridian_store::TierCounts,
    pub backends: std::collections::BTreeMap<String, meridian_dispatch::StatsSnapshot>,
    pub feedback: meridian_feedback::FeedbackTotals,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
