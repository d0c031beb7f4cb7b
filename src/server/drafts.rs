//! Saved reply draft routes. Final sending happens outside this service; the
//! UI uses these to persist edits.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::server::{ApiError, AppState};
use crate::store::{DraftUpdate, NewDraft};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drafts).post(create_draft))
        .route("/{id}", get(get_draft).put(update_draft).delete(delete_draft))
}

#[derive(Deserialize)]
struct CreateDraft {
    email_id: Option<i64>,
    subject: Option<String>,
    to_email: Option<String>,
    body: Option<String>,
}

#[derive(Deserialize)]
struct UpdateDraft {
    subject: Option<String>,
    to_email: Option<String>,
    body: Option<String>,
}

async fn list_drafts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let drafts = state.store.list_drafts().await?;
    Ok(Json(drafts))
}

async fn get_draft(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = state
        .store
        .get_draft(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Draft not found"))?;
    Ok(Json(draft))
}

async fn create_draft(
    State(state): State<AppState>,
    Json(request): Json<CreateDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(subject), Some(to_email), Some(body)) =
        (request.subject, request.to_email, request.body)
    else {
        return Err(ApiError::bad_request(
            "Subject, to_email, and body are required",
        ));
    };
    let draft = state
        .store
        .insert_draft(&NewDraft {
            email_id: request.email_id,
            subject,
            to_email,
            body,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(draft)))
}

async fn update_draft(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let update = DraftUpdate {
        subject: request.subject,
        to_email: request.to_email,
        body: request.body,
    };
    let updated = state
        .store
        .update_draft(id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Draft not found"))?;
    Ok(Json(updated))
}

async fn delete_draft(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.store.delete_draft(id).await? {
        return Err(ApiError::not_found("Draft not found"));
    }
    Ok(Json(json!({ "success": true })))
}
