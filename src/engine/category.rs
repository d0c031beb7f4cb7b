//! Category classification: an ordered keyword rule table.
//!
//! Rules are evaluated top to bottom and the first match wins, so earlier
//! rules shadow later ones: a body mentioning both "urgent" and "invoice"
//! classifies as `urgent`, never `finance`. The table must stay an ordered
//! list; a dispatch map would silently break that shadowing.

use crate::engine::types::{Category, Haystacks, StructuredEmail};

type Predicate = fn(&Haystacks) -> bool;

/// The ordered rule table. Append-only at the bottom unless the shadowing
/// contract is deliberately being changed.
const RULES: &[(Predicate, Category)] = &[
    (
        |h| h.body_any(&["urgent", "maintenance", "security alert"]),
        Category::Urgent,
    ),
    (
        |h| h.body_any(&["invoice", "payment", "billing"]),
        Category::Finance,
    ),
    (
        |h| h.body_any(&["meeting", "project", "interview"]) || h.subject_has("meeting"),
        Category::Work,
    ),
    (|h| h.any_field_has("newsletter"), Category::Newsletter),
    (
        |h| h.body_any(&["birthday", "lunch", "celebrate", "invited"]) || h.subject_has("invited"),
        Category::Personal,
    ),
    (
        |h| h.subject_has("job offer") || h.body_any(&["job offer", "application", "interview"]),
        Category::Work,
    ),
    (
        |h| h.subject_has("password reset") || h.body_any(&["password reset", "security alert"]),
        Category::Urgent,
    ),
    (
        |h| h.body_has("order") && h.body_any(&["shipped", "delivery"]),
        Category::Personal,
    ),
    (|h| h.any_field_has("subscription"), Category::Finance),
];

/// Classify an email into one of the reachable categories.
///
/// Defaults to [`Category::Work`] when no rule matches. `spam` and `social`
/// are never produced (see [`Category`]).
pub fn classify_category(email: &StructuredEmail) -> Category {
    let haystacks = Haystacks::of(email);
    RULES
        .iter()
        .find(|(matches, _)| matches(&haystacks))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Work)
}
