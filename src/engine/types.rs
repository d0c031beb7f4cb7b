//! Shared types for the mock response engine.

use serde::{Deserialize, Serialize};

// ── Structured email ────────────────────────────────────────────────

/// An email record parsed out of free text.
///
/// Derived and ephemeral; reconstructed per call, never persisted by the
/// engine. All fields are independently optional; every consumer degrades to
/// a placeholder when a field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredEmail {
    pub subject: Option<String>,
    pub sender_name: Option<String>,
    pub body: Option<String>,
}

impl StructuredEmail {
    /// Whether any email context was found at all.
    pub fn has_context(&self) -> bool {
        self.subject.is_some() || self.body.is_some()
    }
}

/// Lower-cased body and subject haystacks for keyword-rule matching.
///
/// Built once per classification call so the rule tables can do cheap
/// substring checks without re-lowercasing per rule.
#[derive(Debug)]
pub(crate) struct Haystacks {
    body: String,
    subject: String,
}

impl Haystacks {
    pub(crate) fn of(email: &StructuredEmail) -> Self {
        Self {
            body: email.body.as_deref().unwrap_or("").to_lowercase(),
            subject: email.subject.as_deref().unwrap_or("").to_lowercase(),
        }
    }

    pub(crate) fn body_has(&self, keyword: &str) -> bool {
        self.body.contains(keyword)
    }

    pub(crate) fn body_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.body.contains(k))
    }

    pub(crate) fn subject_has(&self, keyword: &str) -> bool {
        self.subject.contains(keyword)
    }

    /// Keyword appears in either field.
    pub(crate) fn any_field_has(&self, keyword: &str) -> bool {
        self.body.contains(keyword) || self.subject.contains(keyword)
    }
}

// ── Classification outputs ──────────────────────────────────────────

/// Email category.
///
/// `Spam` and `Social` are part of the documented vocabulary (the prompt
/// template shown to a real model lists them) but no mock rule currently
/// emits them; the classifier only ever returns the other five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Urgent,
    Work,
    Personal,
    Newsletter,
    Spam,
    Finance,
    Social,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Newsletter => "newsletter",
            Self::Spam => "spam",
            Self::Finance => "finance",
            Self::Social => "social",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email priority. The high > medium > low ordering exists for rule
/// precedence only; nothing compares priorities numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Conversation ────────────────────────────────────────────────────

/// Role of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged message in a conversation, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
