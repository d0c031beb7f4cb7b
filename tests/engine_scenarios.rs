//! End-to-end engine scenarios: assembled prompts and conversations in, final
//! response text out, exercising field extraction, routing, and rendering
//! together.

use mailpilot::engine::{ChatMessage, EngineInput, Role, produce_response};

fn prompt(text: impl Into<String>) -> EngineInput {
    EngineInput::Prompt(text.into())
}

const BIRTHDAY_CONTEXT: &str = "Email Context:\n\
Subject: Happy Birthday!\n\
From: Jessica Lee <jessica.lee@gmail.com>\n\
Body: Happy birthday!! Hope you have an amazing day. We should celebrate this weekend, let me know if you're free on Saturday!";

const MAINTENANCE_CONTEXT: &str = "Email Context:\n\
Subject: Urgent: Server Maintenance Tonight\n\
From: IT Support <it-support@company.com>\n\
Body: URGENT: We will be performing critical server maintenance tonight. Please save your work and log out before 11 PM.";

const INVOICE_CONTEXT: &str = "Email Context:\n\
Subject: Invoice #INV-2024-001\n\
From: Vendor Billing <billing@vendor.com>\n\
Body: Please find attached invoice #INV-2024-001. Payment is due within 30 days.";

#[test]
fn birthday_summary_names_sender_and_weekend_plans() {
    let out = produce_response(&prompt(format!(
        "{BIRTHDAY_CONTEXT}\n\nUser's question: can you summarize this email?\n\nProvide a helpful, concise response."
    )));
    assert_eq!(
        out,
        "Jessica Lee sent birthday wishes and suggested celebrating this weekend."
    );
}

#[test]
fn birthday_category_is_personal() {
    let out = produce_response(&prompt(format!("{BIRTHDAY_CONTEXT}\n\n[ACTION:CATEGORY]")));
    assert_eq!(out, "personal");
}

#[test]
fn maintenance_is_urgent_and_high_priority() {
    let category = produce_response(&prompt(format!("{MAINTENANCE_CONTEXT}\n\n[ACTION:CATEGORY]")));
    assert_eq!(category, "urgent");

    let priority = produce_response(&prompt(format!("{MAINTENANCE_CONTEXT}\n\n[ACTION:PRIORITY]")));
    assert_eq!(priority, "high");
}

#[test]
fn maintenance_actions_say_save_and_log_out() {
    let out = produce_response(&prompt(format!("{MAINTENANCE_CONTEXT}\n\n[ACTION:ACTIONS]")));
    assert_eq!(out, "1. Save work and log out before the maintenance window.");
}

#[test]
fn invoice_category_and_actions() {
    let category = produce_response(&prompt(format!("{INVOICE_CONTEXT}\n\n[ACTION:CATEGORY]")));
    assert_eq!(category, "finance");

    let actions = produce_response(&prompt(format!("{INVOICE_CONTEXT}\n\n[ACTION:ACTIONS]")));
    assert!(actions.contains("Process the invoice"));
}

#[test]
fn explicit_tag_wins_over_contradicting_request_text() {
    let out = produce_response(&prompt(format!(
        "{INVOICE_CONTEXT}\n\nPlease summarize this email.\n\n[ACTION:CATEGORY]"
    )));
    assert_eq!(out, "finance");
}

#[test]
fn reply_draft_greets_sender_and_signs_off() {
    let out = produce_response(&prompt(format!(
        "{INVOICE_CONTEXT}\n\nUser's question: please draft a reply\n\nProvide a helpful, concise response."
    )));
    assert!(out.starts_with("Hi Vendor Billing,"));
    assert!(out.ends_with("Best regards,"));
    assert!(!out.to_lowercase().contains("i will send"));
}

#[test]
fn reply_composite_with_summary_exclusion_routes_to_summary() {
    // "draft a reply" appears, but the summary exclusion phrase wins.
    let out = produce_response(&prompt(format!(
        "{INVOICE_CONTEXT}\n\nUser's question: can you draft a reply explaining what is this email about?\n\nProvide a helpful, concise response."
    )));
    assert!(out.contains("sent an invoice"));
    assert!(!out.starts_with("Hi "));
}

#[test]
fn risk_question_combines_summary_and_actions() {
    let out = produce_response(&EngineInput::Conversation(vec![
        ChatMessage::new(Role::System, MAINTENANCE_CONTEXT),
        ChatMessage::new(Role::User, "any risks I should know about?"),
    ]));
    assert!(out.contains("scheduled maintenance"));
    assert!(out.contains("1. Save work and log out"));
}

#[test]
fn conversation_last_user_turn_drives_the_route() {
    let out = produce_response(&EngineInput::Conversation(vec![
        ChatMessage::new(Role::System, BIRTHDAY_CONTEXT),
        ChatMessage::new(Role::User, "summarize this"),
        ChatMessage::new(Role::Assistant, "Jessica Lee sent birthday wishes..."),
        ChatMessage::new(Role::User, "what priority is this?"),
    ]));
    assert_eq!(out, "low");
}

#[test]
fn contextless_chitchat_gets_the_generic_fallback() {
    let out = produce_response(&prompt("good morning, how are you?"));
    assert!(out.starts_with("I understand your request."));
}

#[test]
fn context_with_vague_question_defaults_to_summary() {
    let out = produce_response(&EngineInput::Conversation(vec![
        ChatMessage::new(Role::System, INVOICE_CONTEXT),
        ChatMessage::new(Role::User, "thoughts?"),
    ]));
    assert!(out.contains("sent an invoice"));
}
