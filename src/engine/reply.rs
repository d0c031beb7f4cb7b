//! Reply drafting: greeting + topic-matched middle sentence + sign-off.
//!
//! The envelope is fixed: `Hi {sender},` ... `Best regards,`. The middle
//! sentence comes from the ordered topic table and is always a first-person
//! acknowledgment plus a commitment the user can stand behind. Drafts must
//! never promise that the email will be sent automatically; the user reviews
//! and sends manually.

use crate::engine::types::{Haystacks, StructuredEmail};

/// Compose a reply draft body (no subject line).
pub fn compose_reply(email: &StructuredEmail) -> String {
    let sender = email.sender_name.as_deref().unwrap_or("there");
    let middle = middle_sentence(email);
    format!("Hi {sender},\n\n{middle}\n\nBest regards,")
}

fn middle_sentence(email: &StructuredEmail) -> String {
    let h = Haystacks::of(email);

    if h.any_field_has("birthday") || h.body_has("happy birthday") {
        if h.body_any(&["celebrate", "weekend"]) {
            return "Thank you so much for the birthday wishes! 🎉 I'd love to celebrate this weekend. Let me know what works for you!".into();
        }
        return "Thank you so much for the birthday wishes! 🎉 I really appreciate you thinking of me.".into();
    }
    if (h.subject_has("registration") && (h.subject_has("confirmation") || h.body_has("confirmed")))
        || (h.body_has("registration") && h.body_has("confirmed"))
    {
        return "Thank you for the confirmation! I'm looking forward to attending. I'll await the schedule and venue details.".into();
    }
    if h.body_has("maintenance") {
        return "Thanks for the heads-up about tonight's maintenance. I'll make sure to save my work and log out before the outage window.".into();
    }
    if h.body_has("meeting") {
        return "Thanks for reaching out—those meeting times work for me. Let me know if a different slot is better for you.".into();
    }
    if h.body_any(&["invoice", "payment", "billing"]) {
        return "I received the invoice and will review the details. Expect confirmation once the payment is scheduled.".into();
    }
    if h.body_has("interview") || h.any_field_has("application") {
        if h.body_any(&["availability", "available"]) {
            return "Thank you for the invitation! I'm excited about this opportunity. I'm available next week and will send my preferred time slots shortly.".into();
        }
        return "Thank you for the invitation. I'm available and happy to confirm a time that works best for the team.".into();
    }
    if h.body_any(&["review", "feedback"]) {
        return "I'll review the materials and share feedback by the requested deadline.".into();
    }
    if h.body_any(&["lunch", "celebrate"]) {
        return "I'd love to join—count me in! Thanks for including me.".into();
    }
    if h.body_has("budget") {
        return "I'll go through the budget details and share my approval or questions shortly.".into();
    }
    if h.body_any(&["security", "alert"]) {
        return "Thanks for the security notice. I'll review the account activity right away.".into();
    }
    if h.subject_has("job offer") || h.body_any(&["job offer", "pleased to offer"]) {
        return "Thank you for the job offer! I'm excited about this opportunity. I'll review the details and get back to you by the deadline.".into();
    }
    if h.any_field_has("password reset") || h.body_has("reset your password") {
        return "I received the password reset request. If I didn't request this, I'll ignore it. If I did, I'll follow the instructions.".into();
    }
    if h.subject_has("invited") || h.body_any(&["you're invited", "rsvp"]) {
        if h.body_has("rsvp") {
            return "Thank you for the invitation! I'd love to attend. I'll RSVP by the deadline.".into();
        }
        return "Thank you for the invitation! I appreciate you including me.".into();
    }
    if h.body_has("thank you") && h.body_any(&["donation", "contribution"]) {
        return "You're very welcome! I'm happy to support your cause. Keep up the great work!".into();
    }
    if h.body_any(&["collaboration", "collaborating", "collaborate"]) {
        return "Thank you for reaching out! I'm interested in learning more about the collaboration opportunity. Let's schedule a call to discuss.".into();
    }
    if h.any_field_has("deadline") || h.body_any(&["due tomorrow", "due today"]) {
        return "Thanks for the reminder. I'm aware of the deadline and will make sure to submit on time.".into();
    }
    if h.subject_has("welcome") || h.body_has("welcome to") {
        return "Thank you for the warm welcome! I'm excited to get started and explore the platform.".into();
    }
    if h.subject_has("subscription") && h.body_any(&["renew", "renewal"]) {
        return "I received the subscription renewal notice. I'll review the details and update my payment method if needed.".into();
    }
    if h.any_field_has("support ticket") || h.body_has("ticket #") {
        if h.body_any(&["resolved", "fixed"]) {
            return "Thank you for resolving the issue! I appreciate your help and will let you know if I need any further assistance.".into();
        }
        return "Thank you for your support. I'll review the ticket details and respond accordingly.".into();
    }
    if h.body_any(&["started following", "new follower"]) || h.subject_has("follower") {
        return "Thanks for the notification. I'll check out the profile when I have a chance.".into();
    }
    if h.body_has("order") && h.body_any(&["shipped", "delivery"]) {
        return "Thank you for the shipping notification! I'll track the package and look forward to receiving it.".into();
    }

    let subject = email.subject.as_deref().unwrap_or("your email");
    format!("I appreciate the update about \"{subject}\".")
}
