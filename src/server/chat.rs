//! Email agent chat routes.
//!
//! Chat threads are scoped per email; the bare `/api/chat` path addresses the
//! general (email-less) thread. Posting a message stores the user turn,
//! builds the assistant prompt with optional email context, runs the
//! provider, and stores the assistant turn.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::server::{ApiError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_general).post(post_general).delete(clear_general))
        .route(
            "/{email_id}",
            get(get_for_email).post(post_for_email).delete(clear_for_email),
        )
}

#[derive(Deserialize)]
struct ChatRequest {
    message: Option<String>,
}

async fn get_general(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let messages = state.store.list_chat_messages(None).await?;
    Ok(Json(messages))
}

async fn get_for_email(
    State(state): State<AppState>,
    Path(email_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let messages = state.store.list_chat_messages(Some(email_id)).await?;
    Ok(Json(messages))
}

async fn post_general(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    send_message(state, None, request).await
}

async fn post_for_email(
    State(state): State<AppState>,
    Path(email_id): Path<i64>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    send_message(state, Some(email_id), request).await
}

async fn clear_general(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.store.clear_chat(None).await?;
    Ok(Json(json!({ "success": true })))
}

async fn clear_for_email(
    State(state): State<AppState>,
    Path(email_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.clear_chat(Some(email_id)).await?;
    Ok(Json(json!({ "success": true })))
}

async fn send_message(
    state: AppState,
    email_id: Option<i64>,
    request: ChatRequest,
) -> Result<impl IntoResponse, ApiError> {
    let message = match request.message {
        Some(m) if !m.trim().is_empty() => m,
        _ => return Err(ApiError::bad_request("Message is required")),
    };

    let user_message = state
        .store
        .insert_chat_message("user", &message, email_id)
        .await?;

    let mut email_context = String::new();
    if let Some(id) = email_id {
        if let Some(email) = state.store.get_email(id).await? {
            email_context = format!(
                "\n\nEmail Context:\nSubject: {}\nFrom: {} <{}>\nBody: {}",
                email.subject, email.from_name, email.from_email, email.body
            );
        }
    }

    let prompt = format!(
        "You are an Email Productivity Assistant. Help the user manage their emails \
         effectively.{email_context}\n\nUser's question: {message}\n\nProvide a helpful, \
         concise response."
    );

    let response = state.llm.complete(&prompt).await?;
    let assistant_message = state
        .store
        .insert_chat_message("assistant", &response, email_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "userMessage": user_message,
            "assistantMessage": assistant_message,
        })),
    ))
}
