//! Intent routing: resolves free-text requests (or explicit action tags)
//! into one of the engine's behaviors.
//!
//! An embedded `[ACTION:<NAME>]` tag always wins and bypasses every phrase
//! heuristic. Otherwise the phrase rules run in strict order against the
//! intent-detection text. The ordering is load-bearing: reply detection runs
//! first so the broad summary rule can't steal "draft a reply" phrasing, and
//! reply detection itself excludes "what is this email" phrasing so summary
//! requests that merely mention a reply still summarize.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::engine::types::StructuredEmail;

/// The five concrete behaviors an explicit tag or phrase rule can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Category,
    Actions,
    Reply,
    Summary,
    Priority,
}

impl Intent {
    /// Parse an action-tag name (`CATEGORY`, `ACTIONS`, ...), case-insensitive.
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "category" => Some(Self::Category),
            "actions" => Some(Self::Actions),
            "reply" => Some(Self::Reply),
            "summary" => Some(Self::Summary),
            "priority" => Some(Self::Priority),
            _ => None,
        }
    }
}

/// Routing outcome. The two composite variants are responses assembled from
/// several classifiers rather than plain intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Intent(Intent),
    /// Summary plus action list, for risk/concern questions.
    RiskOverview,
    /// Category plus priority folded into a tone recommendation.
    ToneAdvice,
    /// Nothing matched and no email context is present.
    Generic,
}

static ACTION_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[ACTION:(.+?)\]").unwrap());

/// Find an explicit `[ACTION:<NAME>]` directive in raw input text.
///
/// Unknown tag names are ignored so the caller falls through to the phrase
/// heuristics, matching how a typo'd tag behaves upstream.
pub fn find_action_tag(text: &str) -> Option<Intent> {
    ACTION_TAG_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| Intent::from_tag_name(m.as_str()))
}

const REPLY_PHRASES: &[&str] = &["draft a reply", "write a reply", "reply to this"];

// Summary-style phrasings that must not be mistaken for a reply request even
// when "reply"/"draft" words appear alongside them.
const SUMMARY_EXCLUSIONS: &[&str] = &[
    "what is this email",
    "what's this email",
    "what is the email about",
];

const CATEGORY_PHRASES: &[&str] = &["categorize", "category", "what type"];

const ACTION_PHRASES: &[&str] = &["action", "task", "next step", "what should i do"];

const SUMMARY_PHRASES: &[&str] = &[
    "summary",
    "summarize",
    "summarise",
    "what is this email",
    "what is the email about",
    "what's this email",
    "tell me about this email",
    "explain this email",
    "what does this email say",
    "what is it about",
    "what is the email",
];

const PRIORITY_PHRASES: &[&str] = &["priority", "urgent", "how urgent"];

const RISK_PHRASES: &[&str] = &["risk", "concern", "problem", "issue"];

const TONE_PHRASES: &[&str] = &["tone", "style", "how should i respond"];

/// Apply the ordered phrase rules to an intent-detection text.
///
/// `intent_text` must already be lower-cased; `email` is the context parsed
/// from the same call, used for the default-to-summary policy.
pub fn route(intent_text: &str, email: &StructuredEmail) -> Route {
    let has = |phrases: &[&str]| phrases.iter().any(|p| intent_text.contains(p));

    let wants_reply = has(REPLY_PHRASES)
        || (intent_text.contains("reply") && intent_text.contains("draft"));
    if wants_reply && !has(SUMMARY_EXCLUSIONS) {
        return Route::Intent(Intent::Reply);
    }
    if has(CATEGORY_PHRASES) {
        return Route::Intent(Intent::Category);
    }
    if has(ACTION_PHRASES) {
        return Route::Intent(Intent::Actions);
    }
    if has(SUMMARY_PHRASES) {
        return Route::Intent(Intent::Summary);
    }
    if has(PRIORITY_PHRASES) {
        return Route::Intent(Intent::Priority);
    }
    if has(RISK_PHRASES) {
        return Route::RiskOverview;
    }
    if has(TONE_PHRASES) {
        return Route::ToneAdvice;
    }
    if intent_text.contains("what") && email.has_context() {
        return Route::Intent(Intent::Summary);
    }
    // Default-to-summary policy: any remaining question asked while email
    // context is present gets a summary rather than the generic fallback.
    if email.has_context() {
        return Route::Intent(Intent::Summary);
    }
    debug!(text = %intent_text, "No intent matched and no email context; using generic fallback");
    Route::Generic
}
