//! Action-item extraction: the topic table again, this time accumulating
//! "next step" lines.
//!
//! Two deliberately distinct "nothing to do" outcomes exist: the registration
//! confirmation branch emits an explicit "... No action required." line (a
//! non-empty list), while topic-less emails get the literal "No actions
//! required." fallback. Collapsing them would change observable output.

use crate::engine::types::{Haystacks, StructuredEmail};

/// Extract actionable items from an email as a 1-indexed numbered list,
/// or the literal `"No actions required."` when nothing accumulated.
pub fn extract_actions(email: &StructuredEmail) -> String {
    let h = Haystacks::of(email);
    let mut actions: Vec<&str> = Vec::new();

    if h.any_field_has("birthday") || h.body_has("happy birthday") {
        if h.body_any(&["celebrate", "weekend"]) {
            actions.push("Reply with birthday thanks and confirm weekend celebration plans.");
        } else {
            actions.push("Reply with birthday thanks and appreciation.");
        }
    } else if (h.subject_has("registration")
        && (h.subject_has("confirmation") || h.body_has("confirmed")))
        || (h.body_has("registration") && h.body_has("confirmed"))
    {
        actions.push("Optionally acknowledge the registration confirmation. No action required.");
    } else if h.body_any(&["log out", "save your work"]) {
        actions.push("Save work and log out before the maintenance window.");
    } else if h.body_has("secure your account") {
        actions.push("Secure the account immediately if the login was not you.");
    } else if h.body_has("interview") || h.any_field_has("application") {
        if h.body_any(&["availability", "available"]) {
            actions.push("Reply with your availability for the interview next week.");
        } else {
            actions.push("Respond to the interview invitation and confirm your interest.");
        }
    } else if h.body_any(&["review", "feedback"]) {
        actions.push("Review the attached materials and provide feedback by the requested deadline.");
    } else if (h.body_has("schedule") && h.body_any(&["meeting", "available", "availability"]))
        || (h.body_has("availability") && h.body_any(&["meeting", "interview"]))
        || (h.body_has("meeting") && h.body_any(&["schedule", "available", "time"]))
    {
        actions.push("Reply with your availability to schedule the meeting/interview.");
    } else if h.body_any(&["invoice", "payment"]) {
        actions.push("Process the invoice and arrange payment within the stated terms.");
    } else if h.body_any(&["survey", "feedback"]) {
        actions.push("Consider taking the survey to provide feedback.");
    } else if h.body_any(&["lunch", "join"]) {
        actions.push("Reply to confirm attendance for the lunch/event.");
    } else if h.subject_has("job offer") || h.body_any(&["job offer", "pleased to offer"]) {
        actions.push("Review the job offer details and respond by the deadline with your decision.");
    } else if h.any_field_has("password reset") {
        actions.push(
            "If you requested the reset, follow the instructions. If not, ignore the email and secure your account.",
        );
    } else if h.subject_has("invited") || h.body_any(&["you're invited", "rsvp"]) {
        if h.body_has("rsvp") {
            actions.push("RSVP to the event by the deadline if you plan to attend.");
        } else {
            actions.push("Optionally acknowledge the invitation.");
        }
    } else if h.body_any(&["collaboration", "collaborating"]) {
        actions.push("Respond to express interest and schedule a call to discuss the collaboration.");
    } else if h.any_field_has("deadline") || h.body_any(&["due tomorrow", "due today"]) {
        actions.push("Complete and submit the work by the deadline, or request an extension if needed.");
    } else if h.subject_has("subscription") && h.body_any(&["renew", "renewal"]) {
        actions.push("Review the renewal details and update payment method if needed before the renewal date.");
    } else if h.any_field_has("support ticket") {
        if h.body_has("resolved") {
            actions.push("Verify the issue is resolved. Reply if you still experience problems.");
        } else {
            actions.push("Review the support ticket and respond with any additional information needed.");
        }
    } else if h.body_has("order") && h.body_any(&["shipped", "delivery"]) {
        actions.push("Track the shipment and prepare to receive the package.");
    }

    if actions.is_empty() {
        return "No actions required.".to_string();
    }

    actions
        .iter()
        .enumerate()
        .map(|(i, action)| format!("{}. {}", i + 1, action))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(subject: &str, body: &str) -> StructuredEmail {
        StructuredEmail {
            subject: Some(subject.to_string()),
            sender_name: None,
            body: Some(body.to_string()),
        }
    }

    #[test]
    fn registration_confirmed_gets_its_explicit_no_action_line() {
        let e = email("Event", "Your registration has been confirmed.");
        let out = extract_actions(&e);
        // This is the configured branch line, not the empty-list fallback.
        assert_eq!(
            out,
            "1. Optionally acknowledge the registration confirmation. No action required."
        );
        assert_ne!(out, "No actions required.");
    }

    #[test]
    fn empty_list_fallback_is_the_literal_sentinel() {
        let e = email("Hello", "Just wanted to say hi.");
        assert_eq!(extract_actions(&e), "No actions required.");
    }

    #[test]
    fn actions_are_rendered_as_a_numbered_list() {
        let e = email("Invoice", "Please arrange payment for the invoice.");
        let out = extract_actions(&e);
        assert!(out.starts_with("1. "));
    }

    #[test]
    fn maintenance_branch_keys_on_logout_phrases() {
        let e = email("Notice", "Please save your work before tonight's outage.");
        assert!(extract_actions(&e).contains("maintenance window"));
    }

    #[test]
    fn interview_availability_variant() {
        let e = email("Interview", "Interview invitation: what is your availability?");
        assert!(extract_actions(&e).contains("availability for the interview"));
    }

    #[test]
    fn feedback_is_caught_by_review_before_survey() {
        let e = email("Materials", "Please give feedback on the draft.");
        assert!(extract_actions(&e).contains("Review the attached materials"));
    }

    #[test]
    fn survey_branch_still_reachable() {
        let e = email("Quick ask", "Could you fill out our survey?");
        assert!(extract_actions(&e).contains("survey"));
    }

    #[test]
    fn rsvp_variant_vs_plain_invitation() {
        let rsvp = email("You're invited", "Please RSVP by Friday.");
        assert!(extract_actions(&rsvp).contains("RSVP to the event"));

        let plain = email("Invited", "You're invited to the gallery opening.");
        assert!(extract_actions(&plain).contains("Optionally acknowledge the invitation."));
    }

    #[test]
    fn shipped_order_suggests_tracking() {
        let e = email("Order update", "Your order has shipped, delivery expected Tuesday.");
        assert!(extract_actions(&e).contains("Track the shipment"));
    }

    #[test]
    fn missing_fields_degrade_to_the_fallback() {
        assert_eq!(extract_actions(&StructuredEmail::default()), "No actions required.");
    }
}
