//! Field extraction: parses a loosely structured prompt into a
//! [`StructuredEmail`].
//!
//! The calling layer attaches email metadata to prompts as a labeled text
//! block (`Subject:` / `From:` / `Body:`). Matching is first-match-wins and
//! case-insensitive on the label only. Extraction never fails; absent labels
//! simply leave the field unset.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::types::StructuredEmail;

static SUBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Subject:\s*(.+)").unwrap());

// Sender name stops at `<` so "From: Ada Lovelace <ada@example.com>" captures
// just the display name.
static FROM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)From:\s*([^\n<]+)").unwrap());

// Body runs to the end of input, newlines included.
static BODY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)Body:\s*(.+)").unwrap());

/// Extract subject, sender name, and body from raw prompt text.
pub fn extract_fields(text: &str) -> StructuredEmail {
    let capture = |re: &Regex| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
    };

    StructuredEmail {
        subject: capture(&SUBJECT_RE),
        sender_name: capture(&FROM_RE),
        body: capture(&BODY_RE),
    }
}
