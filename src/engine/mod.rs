//! Mock LLM response engine.
//!
//! A deterministic, rule-based stand-in for a generative model: it parses an
//! email context block out of the input, classifies it with ordered keyword
//! tables, and renders canned-but-plausible text. Pure and synchronous: no
//! I/O, no shared state, safe to call concurrently. Total over its input
//! domain: every string in produces some string out, never an error.
//!
//! The real provider ([`crate::llm`]) uses this engine as its fallback path,
//! so callers never see a raw failure from the intelligence layer.

pub mod actions;
pub mod category;
pub mod fields;
pub mod priority;
pub mod reply;
pub mod router;
pub mod summary;
pub mod types;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

pub use actions::extract_actions;
pub use category::classify_category;
pub use fields::extract_fields;
pub use priority::classify_priority;
pub use reply::compose_reply;
pub use router::{Intent, Route, find_action_tag, route};
pub use summary::summarize;
pub use types::{Category, ChatMessage, Priority, Role, StructuredEmail};

/// Response for requests that match nothing and carry no email context.
const GENERIC_FALLBACK: &str =
    "I understand your request. Here is a helpful response based on the email content.";

// The chat layer labels the user's question inside the system prompt; the
// capture stops before the trailing instruction sentence.
static USER_QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)User's question:\s*(.*?)(?:Provide a helpful|$)").unwrap());

/// Input to the engine: either a fully assembled prompt string or an ordered
/// role-tagged conversation.
#[derive(Debug, Clone)]
pub enum EngineInput {
    Prompt(String),
    Conversation(Vec<ChatMessage>),
}

impl EngineInput {
    /// All content joined in order. Email context and action tags are
    /// detected against this.
    fn full_text(&self) -> String {
        match self {
            Self::Prompt(text) => text.clone(),
            Self::Conversation(messages) => messages
                .iter()
                .map(|m| m.content.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// The text intent detection runs against.
    ///
    /// The last user-role message is authoritative when present; otherwise a
    /// `User's question:` label inside system content; otherwise the full
    /// joined text.
    fn intent_text(&self) -> String {
        match self {
            Self::Prompt(text) => labeled_question(text).unwrap_or_else(|| text.clone()),
            Self::Conversation(messages) => {
                if let Some(last_user) = messages
                    .iter()
                    .rev()
                    .find(|m| m.role == Role::User)
                {
                    return last_user.content.clone();
                }
                if let Some(question) = messages
                    .iter()
                    .rev()
                    .filter(|m| m.role == Role::System)
                    .find_map(|m| labeled_question(&m.content))
                {
                    return question;
                }
                self.full_text()
            }
        }
    }
}

fn labeled_question(text: &str) -> Option<String> {
    USER_QUESTION_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|q| !q.is_empty())
}

/// The mock engine. Stateless; `produce_response` is a pure function of its
/// input.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockEngine;

impl MockEngine {
    pub fn new() -> Self {
        Self
    }

    /// Produce a single text response for the given input.
    pub fn produce_response(&self, input: &EngineInput) -> String {
        let full_text = input.full_text();
        let email = extract_fields(&full_text);

        // Explicit action tags bypass every heuristic.
        if let Some(intent) = find_action_tag(&full_text) {
            debug!(?intent, "Explicit action tag found");
            return self.dispatch(intent, &email);
        }

        let intent_text = input.intent_text().to_lowercase();
        match route(&intent_text, &email) {
            Route::Intent(intent) => self.dispatch(intent, &email),
            Route::RiskOverview => {
                format!("{}\n\n{}", summarize(&email), extract_actions(&email))
            }
            Route::ToneAdvice => tone_advice(&email),
            Route::Generic => GENERIC_FALLBACK.to_string(),
        }
    }

    fn dispatch(&self, intent: Intent, email: &StructuredEmail) -> String {
        match intent {
            Intent::Category => classify_category(email).to_string(),
            Intent::Priority => classify_priority(email).to_string(),
            Intent::Summary => summarize(email),
            Intent::Actions => extract_actions(email),
            Intent::Reply => compose_reply(email),
        }
    }
}

/// Fold category and priority into a tone recommendation sentence.
fn tone_advice(email: &StructuredEmail) -> String {
    let category = classify_category(email);
    let priority = classify_priority(email);
    let advice = match priority {
        Priority::High => "brief and direct, and respond as soon as you can",
        Priority::Medium => "professional and to the point",
        Priority::Low => "warm and relaxed; there is no rush",
    };
    format!(
        "This looks like a {category} email with {priority} priority. Keep your reply {advice}."
    )
}

/// Convenience free function mirroring the engine's single-call contract.
pub fn produce_response(input: &EngineInput) -> String {
    MockEngine::new().produce_response(input)
}
