//! Demo inbox and default prompt templates.
//!
//! A fresh database gets a realistic set of unread emails spanning every
//! category and priority level, so the mock engine has something meaningful
//! to classify the moment the server starts.

use chrono::{Duration, Utc};
use tracing::info;

use crate::error::DatabaseError;
use crate::prompts;
use crate::store::{NewEmail, Store};

struct SeedEmail {
    subject: &'static str,
    from_email: &'static str,
    from_name: &'static str,
    body: &'static str,
    hours_ago: i64,
    read: bool,
}

const INBOX_OWNER: &str = "me@mailpilot.dev";

static SEED_EMAILS: &[SeedEmail] = &[
    SeedEmail {
        subject: "Meeting Request: Q4 Planning",
        from_email: "sarah.johnson@company.com",
        from_name: "Sarah Johnson",
        body: "Hi, I would like to schedule a meeting to discuss our Q4 planning. Are you available this Thursday at 2 PM? We need to finalize the budget and roadmap. Please let me know if this works for you.",
        hours_ago: 2,
        read: false,
    },
    SeedEmail {
        subject: "Urgent: Server Maintenance Tonight",
        from_email: "it-support@company.com",
        from_name: "IT Support",
        body: "URGENT: We will be performing critical server maintenance tonight from 11 PM to 3 AM. All systems will be unavailable during this time. Please save your work and log out before 11 PM. This maintenance is critical for security updates.",
        hours_ago: 5,
        read: false,
    },
    SeedEmail {
        subject: "Project Update Required",
        from_email: "mike.chen@company.com",
        from_name: "Mike Chen",
        body: "The deadline for the project milestone is approaching. Please submit your status update for review by Friday. We need approval from the stakeholders before we can proceed to the next phase.",
        hours_ago: 8,
        read: false,
    },
    SeedEmail {
        subject: "Invoice #INV-2024-001",
        from_email: "billing@vendor.com",
        from_name: "Vendor Billing",
        body: "Please find attached invoice #INV-2024-001 for services rendered in November. Payment is due within 30 days. Total amount: $5,240.00. If you have any questions about this invoice, please contact our billing department.",
        hours_ago: 26,
        read: false,
    },
    SeedEmail {
        subject: "Security Alert: New Login Detected",
        from_email: "security@company.com",
        from_name: "Security Team",
        body: "We detected a new login to your account from an unrecognized device in San Francisco, CA. If this was you, no action is needed. If you don't recognize this activity, please secure your account immediately and reset your password.",
        hours_ago: 30,
        read: false,
    },
    SeedEmail {
        subject: "Your Application: Interview Invitation",
        from_email: "recruiting@techcorp.com",
        from_name: "TechCorp Recruiting",
        body: "Thank you for your application to the Senior Engineer position. We were impressed with your background and would like to invite you to an interview. Please reply with your availability for next week.",
        hours_ago: 49,
        read: false,
    },
    SeedEmail {
        subject: "Conference Registration Confirmation",
        from_email: "events@devconf.io",
        from_name: "DevConf Events",
        body: "Your registration for DevConf 2024 has been confirmed! The conference takes place March 15-17. Your ticket and schedule are attached. We look forward to seeing you there.",
        hours_ago: 55,
        read: true,
    },
    SeedEmail {
        subject: "Happy Birthday!",
        from_email: "jessica.lee@gmail.com",
        from_name: "Jessica Lee",
        body: "Happy birthday!! Hope you have an amazing day. We should celebrate this weekend, let me know if you're free on Saturday!",
        hours_ago: 73,
        read: false,
    },
    SeedEmail {
        subject: "You're Invited: Holiday Party",
        from_email: "hr@company.com",
        from_name: "HR Team",
        body: "You're invited to our annual holiday party on December 20th at 6 PM. Food, drinks, and music provided. Please RSVP by December 15th so we can get an accurate headcount.",
        hours_ago: 80,
        read: false,
    },
    SeedEmail {
        subject: "Password Reset Request",
        from_email: "no-reply@service.com",
        from_name: "Account Services",
        body: "We received a request to reset your password. Click the link below to set a new password. This link expires in 24 hours. If you did not request this, you can safely ignore this email.",
        hours_ago: 96,
        read: true,
    },
    SeedEmail {
        subject: "Your Order Has Shipped",
        from_email: "orders@shopmart.com",
        from_name: "ShopMart",
        body: "Good news! Your order #88241 has shipped and is on its way. Your tracking number is 1Z999AA10123456784. Estimated delivery: 3-5 business days.",
        hours_ago: 100,
        read: true,
    },
    SeedEmail {
        subject: "Weekly Newsletter: Tech Digest",
        from_email: "newsletter@techdigest.com",
        from_name: "Tech Digest",
        body: "Welcome to this week's edition of Tech Digest! This newsletter covers the latest in software engineering, new framework releases, and community highlights. You can unsubscribe at any time from your account settings.",
        hours_ago: 120,
        read: true,
    },
    SeedEmail {
        subject: "Subscription Renewal Notice",
        from_email: "billing@cloudtools.com",
        from_name: "CloudTools",
        body: "Your annual subscription will renew on January 1st. The renewal charge of $99.00 will be applied to your card on file. To make changes to your subscription, visit your account page.",
        hours_ago: 140,
        read: false,
    },
    SeedEmail {
        subject: "Support Ticket #4521 Resolved",
        from_email: "support@saasapp.com",
        from_name: "SaasApp Support",
        body: "Your support ticket #4521 regarding the export feature has been resolved. The fix is live in the latest release. If you continue to experience issues, reply to this email and we will reopen the ticket.",
        hours_ago: 150,
        read: true,
    },
];

/// Seed the demo inbox and default templates into empty tables. Safe to call
/// on every startup.
pub(super) async fn seed_if_empty(store: &Store) -> Result<(), DatabaseError> {
    if store.count_emails().await? == 0 {
        let now = Utc::now();
        for email in SEED_EMAILS {
            store
                .insert_email(&NewEmail {
                    subject: email.subject.to_string(),
                    from_email: email.from_email.to_string(),
                    from_name: email.from_name.to_string(),
                    to_email: INBOX_OWNER.to_string(),
                    body: email.body.to_string(),
                    date: now - Duration::hours(email.hours_ago),
                    read: email.read,
                })
                .await?;
        }
        info!(count = SEED_EMAILS.len(), "Seeded demo inbox");
    }

    if store.count_templates().await? == 0 {
        for template in prompts::default_templates() {
            store
                .insert_template(
                    template.name,
                    template.description,
                    template.template,
                    template.kind,
                )
                .await?;
        }
        info!("Seeded default prompt templates");
    }

    Ok(())
}
