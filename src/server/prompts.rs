//! Prompt template management routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::error::DatabaseError;
use crate::server::{ApiError, AppState};
use crate::store::TemplateUpdate;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_templates).post(create_template))
        .route(
            "/{id}",
            get(get_template).put(update_template).delete(delete_template),
        )
}

#[derive(Deserialize)]
struct CreateTemplate {
    name: Option<String>,
    description: Option<String>,
    template: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Deserialize)]
struct UpdateTemplate {
    name: Option<String>,
    description: Option<String>,
    template: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

async fn list_templates(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let templates = state.store.list_templates().await?;
    Ok(Json(templates))
}

async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let template = state
        .store
        .get_template(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Prompt template not found"))?;
    Ok(Json(template))
}

async fn create_template(
    State(state): State<AppState>,
    Json(request): Json<CreateTemplate>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(name), Some(template), Some(kind)) =
        (request.name, request.template, request.kind)
    else {
        return Err(ApiError::bad_request("Name, template, and type are required"));
    };
    let id = state
        .store
        .insert_template(
            &name,
            request.description.as_deref().unwrap_or_default(),
            &template,
            &kind,
        )
        .await
        .map_err(unique_conflict)?;
    let created = state
        .store
        .get_template(id)
        .await?
        .ok_or_else(|| ApiError::internal("Failed to create prompt template"))?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTemplate>,
) -> Result<impl IntoResponse, ApiError> {
    let update = TemplateUpdate {
        name: request.name,
        description: request.description,
        template: request.template,
        kind: request.kind,
    };
    let updated = state
        .store
        .update_template(id, &update)
        .await
        .map_err(unique_conflict)?
        .ok_or_else(|| ApiError::not_found("Prompt template not found"))?;
    Ok(Json(updated))
}

async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.store.delete_template(id).await? {
        return Err(ApiError::not_found("Prompt template not found"));
    }
    Ok(Json(json!({ "success": true })))
}

/// Template names are unique; surface constraint violations as 409.
fn unique_conflict(e: DatabaseError) -> ApiError {
    match &e {
        DatabaseError::Query(message) if message.contains("UNIQUE constraint") => {
            ApiError::conflict("Prompt template with this name already exists")
        }
        _ => e.into(),
    }
}
