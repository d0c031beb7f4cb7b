//! REST API tests against an in-memory store and the mock engine.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use mailpilot::engine::MockEngine;
use mailpilot::server::{AppState, router};
use mailpilot::store::Store;

async fn app() -> Router {
    let store = Arc::new(Store::new_memory().await.unwrap());
    store.seed_if_empty().await.unwrap();
    router(AppState::new(store, Arc::new(MockEngine::new())))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn email_id_by_subject(app: &Router, subject: &str) -> i64 {
    let (status, emails) = send(app, "GET", "/api/emails", None).await;
    assert_eq!(status, StatusCode::OK);
    emails
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["subject"] == subject)
        .unwrap_or_else(|| panic!("no seeded email with subject {subject}"))["id"]
        .as_i64()
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn inbox_is_seeded_and_sorted_newest_first() {
    let app = app().await;
    let (status, emails) = send(&app, "GET", "/api/emails", None).await;
    assert_eq!(status, StatusCode::OK);
    let emails = emails.as_array().unwrap();
    assert!(emails.len() >= 10);
    assert_eq!(emails[0]["subject"], "Meeting Request: Q4 Planning");
}

#[tokio::test]
async fn unknown_email_is_404_with_error_body() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/api/emails/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Email not found");
}

#[tokio::test]
async fn mark_read_round_trip() {
    let app = app().await;
    let id = email_id_by_subject(&app, "Meeting Request: Q4 Planning").await;
    let (status, body) = send(&app, "PATCH", &format!("/api/emails/{id}/read"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, email) = send(&app, "GET", &format!("/api/emails/{id}"), None).await;
    assert_eq!(email["read"], true);

    let (status, _) = send(&app, "PATCH", "/api/emails/9999/read", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn categorize_classifies_and_persists() {
    let app = app().await;
    let id = email_id_by_subject(&app, "Invoice #INV-2024-001").await;
    let (status, body) = send(&app, "POST", &format!("/api/emails/{id}/categorize"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "finance");

    let (_, email) = send(&app, "GET", &format!("/api/emails/{id}"), None).await;
    assert_eq!(email["category"], "finance");
}

#[tokio::test]
async fn priority_assessment_classifies_and_persists() {
    let app = app().await;
    let id = email_id_by_subject(&app, "Urgent: Server Maintenance Tonight").await;
    let (status, body) = send(&app, "POST", &format!("/api/emails/{id}/priority"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["priority"], "high");

    let (_, email) = send(&app, "GET", &format!("/api/emails/{id}"), None).await;
    assert_eq!(email["priority"], "high");
}

#[tokio::test]
async fn summarize_uses_the_invoice_topic() {
    let app = app().await;
    let id = email_id_by_subject(&app, "Invoice #INV-2024-001").await;
    let (status, body) = send(&app, "POST", &format!("/api/emails/{id}/summarize"), None).await;
    assert_eq!(status, StatusCode::OK);
    let summary = body["summary"].as_str().unwrap();
    assert!(summary.starts_with("Vendor Billing"));
    assert!(summary.contains("sent an invoice"));
}

#[tokio::test]
async fn actions_endpoint_returns_the_numbered_list() {
    let app = app().await;
    let id = email_id_by_subject(&app, "Urgent: Server Maintenance Tonight").await;
    let (status, body) = send(&app, "POST", &format!("/api/emails/{id}/actions"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["actions"],
        "1. Save work and log out before the maintenance window."
    );
}

#[tokio::test]
async fn reply_draft_greets_the_sender() {
    let app = app().await;
    let id = email_id_by_subject(&app, "Meeting Request: Q4 Planning").await;
    let (status, body) = send(&app, "POST", &format!("/api/emails/{id}/reply"), None).await;
    assert_eq!(status, StatusCode::OK);
    let reply = body["replyBody"].as_str().unwrap();
    assert!(reply.starts_with("Hi Sarah Johnson,"));
    assert!(reply.ends_with("Best regards,"));
}

#[tokio::test]
async fn chat_round_trip_for_an_email() {
    let app = app().await;
    let id = email_id_by_subject(&app, "Invoice #INV-2024-001").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/chat/{id}"),
        Some(json!({ "message": "summarize this email" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["userMessage"]["role"], "user");
    assert_eq!(body["assistantMessage"]["role"], "assistant");
    assert!(
        body["assistantMessage"]["content"]
            .as_str()
            .unwrap()
            .contains("sent an invoice")
    );

    let (_, messages) = send(&app, "GET", &format!("/api/chat/{id}"), None).await;
    assert_eq!(messages.as_array().unwrap().len(), 2);

    // General chat is a separate thread.
    let (_, general) = send(&app, "GET", "/api/chat", None).await;
    assert!(general.as_array().unwrap().is_empty());

    let (status, body) = send(&app, "DELETE", &format!("/api/chat/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let (_, messages) = send(&app, "GET", &format!("/api/chat/{id}"), None).await;
    assert!(messages.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn chat_without_message_is_rejected() {
    let app = app().await;
    let (status, body) = send(&app, "POST", "/api/chat", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message is required");
}

#[tokio::test]
async fn contextless_chat_gets_the_generic_fallback() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/chat",
        Some(json!({ "message": "good morning!" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(
        body["assistantMessage"]["content"]
            .as_str()
            .unwrap()
            .starts_with("I understand your request.")
    );
}

#[tokio::test]
async fn prompt_templates_are_seeded_and_editable() {
    let app = app().await;
    let (status, templates) = send(&app, "GET", "/api/prompts", None).await;
    assert_eq!(status, StatusCode::OK);
    let templates = templates.as_array().unwrap();
    assert_eq!(templates.len(), 5);

    let summary = templates
        .iter()
        .find(|t| t["type"] == "summary")
        .unwrap();
    let id = summary["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/prompts/{id}"),
        Some(json!({ "template": "Summarize briefly: {subject}" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["template"], "Summarize briefly: {subject}");
    assert_eq!(updated["name"], summary["name"]);
}

#[tokio::test]
async fn prompt_template_creation_validates_and_detects_duplicates() {
    let app = app().await;
    let (status, body) = send(&app, "POST", "/api/prompts", Some(json!({ "name": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name, template, and type are required");

    let (status, created) = send(
        &app,
        "POST",
        "/api/prompts",
        Some(json!({
            "name": "Tone Check",
            "template": "Assess the tone of {body}",
            "type": "tone",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "tone");

    let (status, body) = send(
        &app,
        "POST",
        "/api/prompts",
        Some(json!({
            "name": "Tone Check",
            "template": "different body",
            "type": "tone",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["error"],
        "Prompt template with this name already exists"
    );
}

#[tokio::test]
async fn draft_crud_over_http() {
    let app = app().await;
    let (status, body) = send(&app, "POST", "/api/drafts", Some(json!({ "subject": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Subject, to_email, and body are required");

    let (status, draft) = send(
        &app,
        "POST",
        "/api/drafts",
        Some(json!({
            "subject": "Re: Invoice #INV-2024-001",
            "to_email": "billing@vendor.com",
            "body": "Hi Vendor Billing,\n\nPayment is on the way.\n\nBest regards,",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = draft["id"].as_i64().unwrap();
    assert!(draft["email_id"].is_null());

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/drafts/{id}"),
        Some(json!({ "body": "Edited body" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["body"], "Edited body");
    assert_eq!(updated["subject"], "Re: Invoice #INV-2024-001");

    let (status, body) = send(&app, "DELETE", &format!("/api/drafts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, "GET", &format!("/api/drafts/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
