//! REST API over axum.
//!
//! Route modules mirror the resource layout: `/api/emails`, `/api/chat`,
//! `/api/prompts`, `/api/drafts`. Handlers return [`ApiError`] for failures,
//! which renders as `{"error": "..."}` with the matching status code.

pub mod chat;
pub mod drafts;
pub mod emails;
pub mod prompts;

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::error::{DatabaseError, LlmError};
use crate::llm::LlmProvider;
use crate::store::Store;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub llm: Arc<dyn LlmProvider>,
}

impl AppState {
    pub fn new(store: Arc<Store>, llm: Arc<dyn LlmProvider>) -> Self {
        Self { store, llm }
    }
}

/// An API failure with its HTTP status and client-facing message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(e: DatabaseError) -> Self {
        error!(error = %e, "Database operation failed");
        Self::internal("Database operation failed")
    }
}

impl From<LlmError> for ApiError {
    fn from(e: LlmError) -> Self {
        error!(error = %e, "LLM request failed");
        Self::internal("LLM request failed")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, axum::Json(json!({ "error": self.message }))).into_response()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .nest("/api/emails", emails::routes())
        .nest("/api/chat", chat::routes())
        .nest("/api/prompts", prompts::routes())
        .nest("/api/drafts", drafts::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    axum::Json(json!({ "status": "ok" }))
}
