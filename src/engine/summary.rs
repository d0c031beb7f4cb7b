//! Summary generation: an ordered topic table producing one templated
//! sentence that names the sender and restates the salient fact.
//!
//! Topics are checked top to bottom, first match wins. A few branches pick a
//! richer sentence when a secondary keyword is present (birthday + celebrate,
//! interview + availability, support ticket + resolved).

use crate::engine::types::{Haystacks, StructuredEmail};

/// Longest body preview included in the generic fallback sentence.
const PREVIEW_MAX_CHARS: usize = 200;

/// Summarize an email in one or two sentences.
pub fn summarize(email: &StructuredEmail) -> String {
    let h = Haystacks::of(email);
    let sender = email.sender_name.as_deref().unwrap_or("the sender");
    let subject = email.subject.as_deref().unwrap_or("the email");

    if h.any_field_has("birthday") || h.body_has("happy birthday") {
        if h.body_any(&["celebrate", "weekend"]) {
            return format!("{sender} sent birthday wishes and suggested celebrating this weekend.");
        }
        return format!("{sender} sent birthday wishes.");
    }
    if (h.subject_has("registration") && (h.subject_has("confirmation") || h.body_has("confirmed")))
        || (h.body_has("registration") && h.body_has("confirmed"))
    {
        return format!(
            "{sender} confirmed your registration. They will send schedule and venue details closer to the event date."
        );
    }
    if h.body_has("maintenance") {
        return format!(
            "{sender} is warning about scheduled maintenance tonight. Systems will be unavailable during the window, so save work and log out beforehand."
        );
    }
    if h.body_any(&["new login", "secure your account"]) {
        return format!(
            "{sender} detected a new login to your account from a different device/location. If you don't recognize it, secure the account immediately."
        );
    }
    if h.body_any(&["invoice", "payment"]) {
        return format!(
            "{sender} sent an invoice for recent services and requests payment within the stated terms."
        );
    }
    if h.body_any(&["meeting", "available"]) {
        return format!("{sender} is trying to schedule a meeting and is asking for your availability.");
    }
    if h.body_has("interview") || h.any_field_has("application") {
        if h.body_any(&["availability", "available"]) {
            return format!(
                "{sender} invited you for an interview and is asking for your availability next week."
            );
        }
        return format!(
            "{sender} sent an interview invitation. Respond to confirm your interest and availability."
        );
    }
    if h.body_any(&["feedback", "review"]) {
        return format!(
            "{sender} shared materials and needs your review and feedback by the requested deadline."
        );
    }
    if h.subject_has("job offer") || h.body_any(&["job offer", "pleased to offer"]) {
        return format!("{sender} sent a job offer. Review the details and respond by the deadline.");
    }
    if h.any_field_has("password reset") {
        return format!(
            "{sender} sent a password reset request. Follow the instructions if you requested it, or ignore if you didn't."
        );
    }
    if h.subject_has("invited") || h.body_any(&["you're invited", "rsvp"]) {
        return format!("{sender} sent an event invitation. RSVP by the deadline if you plan to attend.");
    }
    if h.body_has("thank you") && h.body_any(&["donation", "contribution"]) {
        return format!("{sender} sent a thank you message for your donation or contribution.");
    }
    if h.body_any(&["collaboration", "collaborating"]) {
        return format!("{sender} is requesting a collaboration opportunity and wants to schedule a call.");
    }
    if h.any_field_has("deadline") || h.body_has("due tomorrow") {
        return format!(
            "{sender} sent a deadline reminder. Complete and submit the work by the specified deadline."
        );
    }
    if h.subject_has("welcome") || h.body_has("welcome to") {
        return format!("{sender} sent a welcome message with resources to get started on the platform.");
    }
    if h.subject_has("subscription") && h.body_any(&["renew", "renewal"]) {
        return format!("{sender} sent a subscription renewal notice. Review and update payment method if needed.");
    }
    if h.any_field_has("support ticket") {
        if h.body_has("resolved") {
            return format!("{sender} notified you that your support ticket has been resolved.");
        }
        return format!("{sender} sent an update about your support ticket.");
    }
    if h.body_any(&["started following", "new follower"]) {
        return format!("{sender} notified you about a new follower on the social platform.");
    }
    if h.body_has("order") && h.body_any(&["shipped", "delivery"]) {
        return format!("{sender} notified you that your order has been shipped with tracking information.");
    }

    // Generic fallback: name the sender and subject, and quote a capped body
    // preview when there is one.
    match email.body.as_deref().map(str::trim).filter(|b| !b.is_empty()) {
        Some(body) => format!(
            "{sender} wrote about \"{subject}\". The email says: {}",
            preview(body)
        ),
        None => format!("{sender} wrote about \"{subject}\". Review the details and respond as needed."),
    }
}

fn preview(body: &str) -> String {
    let mut chars = body.chars();
    let short: String = chars.by_ref().take(PREVIEW_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{short}...")
    } else {
        short
    }
}
