//! Priority classification: ordered rules over the body only.

use crate::engine::types::{Haystacks, Priority, StructuredEmail};

type Predicate = fn(&Haystacks) -> bool;

const RULES: &[(Predicate, Priority)] = &[
    (
        |h| h.body_any(&["urgent", "immediately", "critical", "security"]),
        Priority::High,
    ),
    (
        |h| h.body_any(&["deadline", "review by", "approval"]),
        Priority::Medium,
    ),
];

/// Classify an email's priority. Defaults to [`Priority::Low`].
///
/// Only the body is consulted; an urgent-sounding subject over a calm body
/// stays low.
pub fn classify_priority(email: &StructuredEmail) -> Priority {
    let haystacks = Haystacks::of(email);
    RULES
        .iter()
        .find(|(matches, _)| matches(&haystacks))
        .map(|(_, priority)| *priority)
        .unwrap_or(Priority::Low)
}
