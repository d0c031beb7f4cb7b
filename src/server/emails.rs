//! Email routes: inbox reads plus the five LLM-backed actions.
//!
//! Each action endpoint loads the email, renders the stored prompt template
//! for its kind, appends the routing tag, and sends the result through the
//! configured provider. Category and priority results are persisted back to
//! the email row.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::info;

use crate::prompts;
use crate::server::{ApiError, AppState};
use crate::store::EmailRecord;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_emails))
        .route("/{id}", get(get_email))
        .route("/{id}/read", patch(mark_read))
        .route("/{id}/categorize", post(categorize))
        .route("/{id}/actions", post(extract_actions))
        .route("/{id}/reply", post(draft_reply))
        .route("/{id}/summarize", post(summarize))
        .route("/{id}/priority", post(assess_priority))
}

async fn list_emails(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let emails = state.store.list_emails().await?;
    Ok(Json(emails))
}

async fn get_email(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let email = load_email(&state, id).await?;
    Ok(Json(email))
}

async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.store.mark_read(id).await? {
        return Err(ApiError::not_found("Email not found"));
    }
    Ok(Json(json!({ "success": true })))
}

async fn categorize(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let (email, category) =
        run_action(&state, id, prompts::KIND_CATEGORIZATION, "CATEGORY").await?;
    state.store.set_email_category(email.id, &category).await?;
    info!(email_id = email.id, category = %category, "Email categorized");
    Ok(Json(json!({ "category": category })))
}

async fn extract_actions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let (_, actions) = run_action(&state, id, prompts::KIND_ACTION_EXTRACTION, "ACTIONS").await?;
    Ok(Json(json!({ "actions": actions })))
}

async fn draft_reply(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let email = load_email(&state, id).await?;
    let template = load_template(&state, prompts::KIND_REPLY_DRAFT, "Reply draft").await?;

    let sender = if email.from_name.is_empty() {
        "the sender"
    } else {
        &email.from_name
    };
    let greeting_name = if email.from_name.is_empty() {
        "there"
    } else {
        &email.from_name
    };
    let guidance = format!(
        "\nFormatting requirements:\n\
         - Begin with a friendly greeting that mentions {sender} (e.g., \"Hi {greeting_name},\")\n\
         - Provide 1-2 concise paragraphs that acknowledge the message, answer questions, and outline next steps\n\
         - Close with a professional sign-off such as \"Best regards,\" followed by a placeholder for the user's name\n\
         - Keep the tone helpful, appreciative, and confident\n"
    );
    let prompt = format!(
        "{}\n{guidance}\n[ACTION:REPLY]",
        prompts::render(&template.template, &email)
    );

    let reply_body = state.llm.complete(&prompt).await?;
    Ok(Json(json!({ "replyBody": reply_body.trim() })))
}

async fn summarize(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let (_, summary) = run_action(&state, id, prompts::KIND_SUMMARY, "SUMMARY").await?;
    Ok(Json(json!({ "summary": summary })))
}

async fn assess_priority(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let (email, priority) = run_action(&state, id, prompts::KIND_PRIORITY, "PRIORITY").await?;
    state.store.set_email_priority(email.id, &priority).await?;
    info!(email_id = email.id, priority = %priority, "Priority assessed");
    Ok(Json(json!({ "priority": priority })))
}

// ── Helpers ─────────────────────────────────────────────────────────

async fn load_email(state: &AppState, id: i64) -> Result<EmailRecord, ApiError> {
    state
        .store
        .get_email(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Email not found"))
}

async fn load_template(
    state: &AppState,
    kind: &str,
    label: &str,
) -> Result<crate::store::PromptTemplateRecord, ApiError> {
    state
        .store
        .get_template_by_kind(kind)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("{label} prompt template not found")))
}

/// Render the template for `kind`, append the routing tag, and run the
/// provider. Returns the email along with the trimmed completion.
async fn run_action(
    state: &AppState,
    id: i64,
    kind: &str,
    tag: &str,
) -> Result<(EmailRecord, String), ApiError> {
    let email = load_email(state, id).await?;
    let template = load_template(state, kind, kind_label(kind)).await?;
    let prompt = format!(
        "{}\n\n[ACTION:{tag}]",
        prompts::render(&template.template, &email)
    );
    let output = state.llm.complete(&prompt).await?;
    Ok((email, output.trim().to_string()))
}

fn kind_label(kind: &str) -> &'static str {
    match kind {
        prompts::KIND_CATEGORIZATION => "Categorization",
        prompts::KIND_ACTION_EXTRACTION => "Action extraction",
        prompts::KIND_SUMMARY => "Summary",
        prompts::KIND_PRIORITY => "Priority",
        _ => "Requested",
    }
}
