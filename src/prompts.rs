//! Prompt templates and placeholder substitution.
//!
//! Templates are stored in the database and editable over REST; this module
//! holds the seeded defaults and the straight string-replace rendering the
//! action endpoints use. Every occurrence of a placeholder is substituted,
//! so templates that mention a field twice (the reply draft names the sender
//! in both its guidance and its email block) render fully.

use crate::store::EmailRecord;

/// Template kinds the action endpoints look up.
pub const KIND_CATEGORIZATION: &str = "categorization";
pub const KIND_ACTION_EXTRACTION: &str = "action_extraction";
pub const KIND_REPLY_DRAFT: &str = "reply_draft";
pub const KIND_SUMMARY: &str = "summary";
pub const KIND_PRIORITY: &str = "priority";

/// A seedable prompt template.
pub struct DefaultTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub template: &'static str,
    pub kind: &'static str,
}

/// Substitute `{subject}`, `{from_name}`, `{from_email}`, and `{body}` with
/// the email's fields.
pub fn render(template: &str, email: &EmailRecord) -> String {
    template
        .replace("{subject}", &email.subject)
        .replace("{from_name}", &email.from_name)
        .replace("{from_email}", &email.from_email)
        .replace("{body}", &email.body)
}

/// The default template set, seeded when the table is empty so a fresh
/// environment immediately has usable LLM instructions.
pub fn default_templates() -> &'static [DefaultTemplate] {
    DEFAULTS
}

static DEFAULTS: &[DefaultTemplate] = &[
    DefaultTemplate {
        name: "Email Categorization",
        description: "Categorize emails into predefined categories",
        template: "Analyze the following email and categorize it into one of these categories:\n\
- urgent: Requires immediate attention\n\
- work: Work-related tasks and communications\n\
- personal: Personal messages\n\
- newsletter: Newsletters and subscriptions\n\
- spam: Unwanted or suspicious emails\n\
- finance: Bills, invoices, and financial matters\n\
- social: Social invitations and casual messages\n\
\n\
Email:\n\
Subject: {subject}\n\
From: {from_name} <{from_email}>\n\
Body: {body}\n\
\n\
Respond with only the category name.",
        kind: KIND_CATEGORIZATION,
    },
    DefaultTemplate {
        name: "Action Extraction",
        description: "Extract actionable items from emails",
        template: "Analyze the following email and extract any actionable items or tasks mentioned.\n\
\n\
Email:\n\
Subject: {subject}\n\
From: {from_name} <{from_email}>\n\
Body: {body}\n\
\n\
List all actionable items in a clear, concise format. If there are no actions, respond with \"No actions required.\"",
        kind: KIND_ACTION_EXTRACTION,
    },
    DefaultTemplate {
        name: "Auto Reply Draft",
        description: "Generate a polite, context-aware reply draft that the user can review and edit before sending",
        template: "You are an assistant that writes professional email replies on behalf of the user.\n\
\n\
When drafting the reply:\n\
- Start with a friendly greeting that references the sender's name (e.g., \"Hi {from_name},\")\n\
- Use short paragraphs (blank line between them) that acknowledge the original message, address questions, and provide next steps\n\
- Thank the sender when appropriate and keep a professional, helpful tone\n\
- End with a professional closing such as \"Best regards,\" followed by a placeholder for the user's name\n\
- Never promise to send emails automatically; the user will review and send manually\n\
\n\
Original Email:\n\
Subject: {subject}\n\
From: {from_name} <{from_email}>\n\
Body: {body}\n\
\n\
Draft a reply email body only (no subject line).",
        kind: KIND_REPLY_DRAFT,
    },
    DefaultTemplate {
        name: "Email Summary",
        description: "Create a concise summary of the email",
        template: "Summarize the following email in 2-3 sentences, highlighting:\n\
- Main purpose or topic\n\
- Key points or requests\n\
- Any deadlines or important dates\n\
\n\
Email:\n\
Subject: {subject}\n\
From: {from_name} <{from_email}>\n\
Body: {body}\n\
\n\
Provide a concise summary.",
        kind: KIND_SUMMARY,
    },
    DefaultTemplate {
        name: "Priority Assessment",
        description: "Assess the priority level of an email",
        template: "Analyze the following email and determine its priority level:\n\
- high: Urgent, requires immediate attention, has deadlines\n\
- medium: Important but not urgent, should be addressed soon\n\
- low: Can be handled later, informational only\n\
\n\
Email:\n\
Subject: {subject}\n\
From: {from_name} <{from_email}>\n\
Body: {body}\n\
\n\
Respond with only the priority level (high, medium, or low).",
        kind: KIND_PRIORITY,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_email() -> EmailRecord {
        EmailRecord {
            id: 1,
            subject: "Invoice #42".into(),
            from_email: "billing@x.com".into(),
            from_name: "Billing Team".into(),
            to_email: "you@example.com".into(),
            body: "Payment is due.".into(),
            date: Utc::now(),
            read: false,
            category: None,
            priority: None,
        }
    }

    #[test]
    fn render_substitutes_all_placeholders() {
        let out = render(
            "Subject: {subject}\nFrom: {from_name} <{from_email}>\nBody: {body}",
            &sample_email(),
        );
        assert_eq!(
            out,
            "Subject: Invoice #42\nFrom: Billing Team <billing@x.com>\nBody: Payment is due."
        );
    }

    #[test]
    fn render_replaces_every_occurrence() {
        let out = render("{subject} / {subject}", &sample_email());
        assert_eq!(out, "Invoice #42 / Invoice #42");
    }

    #[test]
    fn reply_template_renders_sender_in_both_places() {
        // The guidance bullet and the email block both name the sender; a
        // leftover "{from_name}" here would leak into mock reply greetings.
        let reply = default_templates()
            .iter()
            .find(|t| t.kind == KIND_REPLY_DRAFT)
            .unwrap();
        let out = render(reply.template, &sample_email());
        assert!(!out.contains("{from_name}"));
        assert!(out.contains("Hi Billing Team,"));
        assert!(out.contains("From: Billing Team <billing@x.com>"));
    }

    #[test]
    fn all_five_default_kinds_present() {
        let kinds: Vec<_> = default_templates().iter().map(|t| t.kind).collect();
        for kind in [
            KIND_CATEGORIZATION,
            KIND_ACTION_EXTRACTION,
            KIND_REPLY_DRAFT,
            KIND_SUMMARY,
            KIND_PRIORITY,
        ] {
            assert!(kinds.contains(&kind), "missing template kind {kind}");
        }
    }

    #[test]
    fn default_templates_render_cleanly() {
        let email = sample_email();
        for t in default_templates() {
            let out = render(t.template, &email);
            assert!(out.contains("Invoice #42"), "{} did not substitute", t.name);
            assert!(!out.contains("{from_email}"));
        }
    }
}
