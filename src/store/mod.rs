//! Persistence: libSQL backend for emails, prompt templates, drafts, and
//! chat history.
//!
//! A single connection is reused for all operations; `libsql::Connection` is
//! `Send + Sync` and safe for concurrent async use. Schema changes go through
//! [`migrations`], and a fresh database is seeded with a demo inbox and the
//! default prompt templates so the app works out of the box.

pub mod migrations;
pub mod seed;

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use libsql::{Connection, Database as LibSqlDatabase, params};
use serde::Serialize;
use tracing::info;

use crate::error::DatabaseError;

// ── Records ─────────────────────────────────────────────────────────

/// A stored email.
#[derive(Debug, Clone, Serialize)]
pub struct EmailRecord {
    pub id: i64,
    pub subject: String,
    pub from_email: String,
    pub from_name: String,
    pub to_email: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub read: bool,
    pub category: Option<String>,
    pub priority: Option<String>,
}

/// Fields for inserting an email (seeding).
#[derive(Debug, Clone)]
pub struct NewEmail {
    pub subject: String,
    pub from_email: String,
    pub from_name: String,
    pub to_email: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub read: bool,
}

/// A stored prompt template.
#[derive(Debug, Clone, Serialize)]
pub struct PromptTemplateRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub template: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a prompt template; unset fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct TemplateUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub template: Option<String>,
    pub kind: Option<String>,
}

/// A saved reply draft.
#[derive(Debug, Clone, Serialize)]
pub struct DraftRecord {
    pub id: i64,
    pub email_id: Option<i64>,
    pub subject: String,
    pub to_email: String,
    pub body: String,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a draft.
#[derive(Debug, Clone)]
pub struct NewDraft {
    pub email_id: Option<i64>,
    pub subject: String,
    pub to_email: String,
    pub body: String,
}

/// Partial update for a draft; unset fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct DraftUpdate {
    pub subject: Option<String>,
    pub to_email: Option<String>,
    pub body: Option<String>,
}

/// A stored chat message (general chat when `email_id` is unset).
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageRecord {
    pub id: i64,
    pub role: String,
    pub content: String,
    pub email_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

// ── Store ───────────────────────────────────────────────────────────

/// libSQL-backed store.
pub struct Store {
    #[allow(dead_code)]
    db: Arc<LibSqlDatabase>,
    conn: Connection,
}

impl Store {
    /// Open (or create) a local database file and run migrations.
    pub async fn new_local(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Connection(format!("Failed to create database directory: {e}"))
            })?;
        }
        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Connection(format!("Failed to open database: {e}")))?;
        let store = Self::from_db(db).await?;
        info!(path = %path.display(), "Database opened");
        Ok(store)
    }

    /// Create an in-memory database (for tests).
    pub async fn new_memory() -> Result<Self, DatabaseError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| {
                DatabaseError::Connection(format!("Failed to create in-memory database: {e}"))
            })?;
        Self::from_db(db).await
    }

    async fn from_db(db: LibSqlDatabase) -> Result<Self, DatabaseError> {
        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Connection(format!("Failed to create connection: {e}")))?;
        migrations::run_migrations(&conn).await?;
        Ok(Self {
            db: Arc::new(db),
            conn,
        })
    }

    fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Seed the demo inbox and default prompt templates into empty tables.
    pub async fn seed_if_empty(&self) -> Result<(), DatabaseError> {
        seed::seed_if_empty(self).await
    }

    // ── Emails ──────────────────────────────────────────────────────

    pub async fn list_emails(&self) -> Result<Vec<EmailRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT {EMAIL_COLUMNS} FROM emails ORDER BY date DESC"), ())
            .await
            .map_err(query_err)?;
        let mut emails = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            emails.push(row_to_email(&row).map_err(query_err)?);
        }
        Ok(emails)
    }

    pub async fn get_email(&self, id: i64) -> Result<Option<EmailRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {EMAIL_COLUMNS} FROM emails WHERE id = ?1"),
                params![id],
            )
            .await
            .map_err(query_err)?;
        match rows.next().await.map_err(query_err)? {
            Some(row) => Ok(Some(row_to_email(&row).map_err(query_err)?)),
            None => Ok(None),
        }
    }

    /// Mark an email as read. Returns false if the id is unknown.
    pub async fn mark_read(&self, id: i64) -> Result<bool, DatabaseError> {
        let changed = self
            .conn()
            .execute("UPDATE emails SET read = 1 WHERE id = ?1", params![id])
            .await
            .map_err(query_err)?;
        Ok(changed > 0)
    }

    pub async fn set_email_category(&self, id: i64, category: &str) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "UPDATE emails SET category = ?1 WHERE id = ?2",
                params![category, id],
            )
            .await
            .map_err(query_err)?;
        Ok(())
    }

    pub async fn set_email_priority(&self, id: i64, priority: &str) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "UPDATE emails SET priority = ?1 WHERE id = ?2",
                params![priority, id],
            )
            .await
            .map_err(query_err)?;
        Ok(())
    }

    pub async fn count_emails(&self) -> Result<i64, DatabaseError> {
        self.count("emails").await
    }

    pub async fn insert_email(&self, email: &NewEmail) -> Result<i64, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO emails (subject, from_email, from_name, to_email, body, date, read)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    email.subject.as_str(),
                    email.from_email.as_str(),
                    email.from_name.as_str(),
                    email.to_email.as_str(),
                    email.body.as_str(),
                    email.date.to_rfc3339(),
                    email.read as i64,
                ],
            )
            .await
            .map_err(query_err)?;
        Ok(self.conn().last_insert_rowid())
    }

    // ── Prompt templates ────────────────────────────────────────────

    pub async fn list_templates(&self) -> Result<Vec<PromptTemplateRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {TEMPLATE_COLUMNS} FROM prompt_templates ORDER BY name"),
                (),
            )
            .await
            .map_err(query_err)?;
        let mut templates = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            templates.push(row_to_template(&row).map_err(query_err)?);
        }
        Ok(templates)
    }

    pub async fn get_template(&self, id: i64) -> Result<Option<PromptTemplateRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {TEMPLATE_COLUMNS} FROM prompt_templates WHERE id = ?1"),
                params![id],
            )
            .await
            .map_err(query_err)?;
        match rows.next().await.map_err(query_err)? {
            Some(row) => Ok(Some(row_to_template(&row).map_err(query_err)?)),
            None => Ok(None),
        }
    }

    /// Look up the template the action endpoints render for a given kind
    /// ("categorization", "summary", ...).
    pub async fn get_template_by_kind(
        &self,
        kind: &str,
    ) -> Result<Option<PromptTemplateRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {TEMPLATE_COLUMNS} FROM prompt_templates WHERE type = ?1"),
                params![kind],
            )
            .await
            .map_err(query_err)?;
        match rows.next().await.map_err(query_err)? {
            Some(row) => Ok(Some(row_to_template(&row).map_err(query_err)?)),
            None => Ok(None),
        }
    }

    pub async fn update_template(
        &self,
        id: i64,
        update: &TemplateUpdate,
    ) -> Result<Option<PromptTemplateRecord>, DatabaseError> {
        let Some(existing) = self.get_template(id).await? else {
            return Ok(None);
        };
        let name = update.name.as_deref().unwrap_or(&existing.name);
        let description = update
            .description
            .as_deref()
            .or(existing.description.as_deref());
        let template = update.template.as_deref().unwrap_or(&existing.template);
        let kind = update.kind.as_deref().unwrap_or(&existing.kind);
        self.conn()
            .execute(
                "UPDATE prompt_templates
                 SET name = ?1, description = ?2, template = ?3, type = ?4,
                     updated_at = datetime('now')
                 WHERE id = ?5",
                params![name, opt_text(description), template, kind, id],
            )
            .await
            .map_err(query_err)?;
        self.get_template(id).await
    }

    /// Delete a prompt template. Returns false if the id is unknown.
    pub async fn delete_template(&self, id: i64) -> Result<bool, DatabaseError> {
        let changed = self
            .conn()
            .execute("DELETE FROM prompt_templates WHERE id = ?1", params![id])
            .await
            .map_err(query_err)?;
        Ok(changed > 0)
    }

    pub async fn count_templates(&self) -> Result<i64, DatabaseError> {
        self.count("prompt_templates").await
    }

    pub async fn insert_template(
        &self,
        name: &str,
        description: &str,
        template: &str,
        kind: &str,
    ) -> Result<i64, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO prompt_templates (name, description, template, type, updated_at)
                 VALUES (?1, ?2, ?3, ?4, datetime('now'))",
                params![name, description, template, kind],
            )
            .await
            .map_err(query_err)?;
        Ok(self.conn().last_insert_rowid())
    }

    // ── Drafts ──────────────────────────────────────────────────────

    pub async fn list_drafts(&self) -> Result<Vec<DraftRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {DRAFT_COLUMNS} FROM drafts ORDER BY updated_at DESC"),
                (),
            )
            .await
            .map_err(query_err)?;
        let mut drafts = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            drafts.push(row_to_draft(&row).map_err(query_err)?);
        }
        Ok(drafts)
    }

    pub async fn get_draft(&self, id: i64) -> Result<Option<DraftRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {DRAFT_COLUMNS} FROM drafts WHERE id = ?1"),
                params![id],
            )
            .await
            .map_err(query_err)?;
        match rows.next().await.map_err(query_err)? {
            Some(row) => Ok(Some(row_to_draft(&row).map_err(query_err)?)),
            None => Ok(None),
        }
    }

    pub async fn insert_draft(&self, draft: &NewDraft) -> Result<DraftRecord, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO drafts (email_id, subject, to_email, body) VALUES (?1, ?2, ?3, ?4)",
                params![
                    opt_int(draft.email_id),
                    draft.subject.as_str(),
                    draft.to_email.as_str(),
                    draft.body.as_str(),
                ],
            )
            .await
            .map_err(query_err)?;
        let id = self.conn().last_insert_rowid();
        self.get_draft(id).await?.ok_or(DatabaseError::NotFound {
            entity: "draft",
            id,
        })
    }

    pub async fn update_draft(
        &self,
        id: i64,
        update: &DraftUpdate,
    ) -> Result<Option<DraftRecord>, DatabaseError> {
        let Some(existing) = self.get_draft(id).await? else {
            return Ok(None);
        };
        let subject = update.subject.as_deref().unwrap_or(&existing.subject);
        let to_email = update.to_email.as_deref().unwrap_or(&existing.to_email);
        let body = update.body.as_deref().unwrap_or(&existing.body);
        self.conn()
            .execute(
                "UPDATE drafts
                 SET subject = ?1, to_email = ?2, body = ?3, updated_at = datetime('now')
                 WHERE id = ?4",
                params![subject, to_email, body, id],
            )
            .await
            .map_err(query_err)?;
        self.get_draft(id).await
    }

    /// Delete a draft. Returns false if the id is unknown.
    pub async fn delete_draft(&self, id: i64) -> Result<bool, DatabaseError> {
        let changed = self
            .conn()
            .execute("DELETE FROM drafts WHERE id = ?1", params![id])
            .await
            .map_err(query_err)?;
        Ok(changed > 0)
    }

    // ── Chat messages ───────────────────────────────────────────────

    /// Chat history for one email, or the general chat when `email_id` is
    /// `None`. Chronological order.
    pub async fn list_chat_messages(
        &self,
        email_id: Option<i64>,
    ) -> Result<Vec<ChatMessageRecord>, DatabaseError> {
        let mut rows = match email_id {
            Some(id) => self
                .conn()
                .query(
                    &format!(
                        "SELECT {CHAT_COLUMNS} FROM chat_messages WHERE email_id = ?1 ORDER BY id"
                    ),
                    params![id],
                )
                .await
                .map_err(query_err)?,
            None => self
                .conn()
                .query(
                    &format!(
                        "SELECT {CHAT_COLUMNS} FROM chat_messages WHERE email_id IS NULL ORDER BY id"
                    ),
                    (),
                )
                .await
                .map_err(query_err)?,
        };
        let mut messages = Vec::new();
        while let Ok(Some(row)) = rows.next().await {
            messages.push(row_to_chat_message(&row).map_err(query_err)?);
        }
        Ok(messages)
    }

    pub async fn insert_chat_message(
        &self,
        role: &str,
        content: &str,
        email_id: Option<i64>,
    ) -> Result<ChatMessageRecord, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO chat_messages (role, content, email_id, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![role, content, opt_int(email_id), Utc::now().to_rfc3339()],
            )
            .await
            .map_err(query_err)?;
        let id = self.conn().last_insert_rowid();
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {CHAT_COLUMNS} FROM chat_messages WHERE id = ?1"),
                params![id],
            )
            .await
            .map_err(query_err)?;
        match rows.next().await.map_err(query_err)? {
            Some(row) => row_to_chat_message(&row).map_err(query_err),
            None => Err(DatabaseError::NotFound {
                entity: "chat_message",
                id,
            }),
        }
    }

    /// Clear one email's chat, or the general chat when `email_id` is `None`.
    pub async fn clear_chat(&self, email_id: Option<i64>) -> Result<usize, DatabaseError> {
        let changed = match email_id {
            Some(id) => self
                .conn()
                .execute("DELETE FROM chat_messages WHERE email_id = ?1", params![id])
                .await
                .map_err(query_err)?,
            None => self
                .conn()
                .execute("DELETE FROM chat_messages WHERE email_id IS NULL", ())
                .await
                .map_err(query_err)?,
        };
        Ok(changed as usize)
    }

    async fn count(&self, table: &str) -> Result<i64, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await
            .map_err(query_err)?;
        match rows.next().await.map_err(query_err)? {
            Some(row) => row.get::<i64>(0).map_err(query_err),
            None => Ok(0),
        }
    }
}

// ── Row mapping ─────────────────────────────────────────────────────

const EMAIL_COLUMNS: &str =
    "id, subject, from_email, from_name, to_email, body, date, read, category, priority";

const TEMPLATE_COLUMNS: &str = "id, name, description, template, type, updated_at";

const DRAFT_COLUMNS: &str = "id, email_id, subject, to_email, body, updated_at";

const CHAT_COLUMNS: &str = "id, role, content, email_id, created_at";

fn query_err(e: impl std::fmt::Display) -> DatabaseError {
    DatabaseError::Query(e.to_string())
}

/// Convert `Option<i64>` to a libsql value.
fn opt_int(v: Option<i64>) -> libsql::Value {
    match v {
        Some(n) => libsql::Value::Integer(n),
        None => libsql::Value::Null,
    }
}

/// Convert `Option<&str>` to a libsql value.
fn opt_text(s: Option<&str>) -> libsql::Value {
    match s {
        Some(v) => libsql::Value::Text(v.to_string()),
        None => libsql::Value::Null,
    }
}

/// Parse an RFC 3339 or SQLite datetime string.
fn parse_datetime(s: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return ndt.and_utc();
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return ndt.and_utc();
    }
    DateTime::<Utc>::MIN_UTC
}

fn row_to_email(row: &libsql::Row) -> Result<EmailRecord, libsql::Error> {
    let date_str: String = row.get(6)?;
    Ok(EmailRecord {
        id: row.get(0)?,
        subject: row.get(1)?,
        from_email: row.get(2)?,
        from_name: row.get(3)?,
        to_email: row.get(4)?,
        body: row.get(5)?,
        date: parse_datetime(&date_str),
        read: row.get::<i64>(7)? != 0,
        category: row.get::<String>(8).ok(),
        priority: row.get::<String>(9).ok(),
    })
}

fn row_to_template(row: &libsql::Row) -> Result<PromptTemplateRecord, libsql::Error> {
    let updated_str: String = row.get(5)?;
    Ok(PromptTemplateRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get::<String>(2).ok(),
        template: row.get(3)?,
        kind: row.get(4)?,
        updated_at: parse_datetime(&updated_str),
    })
}

fn row_to_draft(row: &libsql::Row) -> Result<DraftRecord, libsql::Error> {
    let updated_str: String = row.get(5)?;
    Ok(DraftRecord {
        id: row.get(0)?,
        email_id: row.get::<i64>(1).ok(),
        subject: row.get(2)?,
        to_email: row.get(3)?,
        body: row.get(4)?,
        updated_at: parse_datetime(&updated_str),
    })
}

fn row_to_chat_message(row: &libsql::Row) -> Result<ChatMessageRecord, libsql::Error> {
    let created_str: String = row.get(4)?;
    Ok(ChatMessageRecord {
        id: row.get(0)?,
        role: row.get(1)?,
        content: row.get(2)?,
        email_id: row.get::<i64>(3).ok(),
        created_at: parse_datetime(&created_str),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> Store {
        Store::new_memory().await.unwrap()
    }

    fn new_email(subject: &str, body: &str) -> NewEmail {
        NewEmail {
            subject: subject.into(),
            from_email: "sender@example.com".into(),
            from_name: "Sender".into(),
            to_email: "you@example.com".into(),
            body: body.into(),
            date: Utc::now(),
            read: false,
        }
    }

    #[tokio::test]
    async fn insert_and_fetch_email() {
        let store = store().await;
        let id = store.insert_email(&new_email("Hello", "World")).await.unwrap();
        let email = store.get_email(id).await.unwrap().unwrap();
        assert_eq!(email.subject, "Hello");
        assert!(!email.read);
        assert!(email.category.is_none());
    }

    #[tokio::test]
    async fn mark_read_reports_missing_rows() {
        let store = store().await;
        let id = store.insert_email(&new_email("a", "b")).await.unwrap();
        assert!(store.mark_read(id).await.unwrap());
        assert!(store.get_email(id).await.unwrap().unwrap().read);
        assert!(!store.mark_read(9999).await.unwrap());
    }

    #[tokio::test]
    async fn category_and_priority_roundtrip() {
        let store = store().await;
        let id = store.insert_email(&new_email("a", "b")).await.unwrap();
        store.set_email_category(id, "finance").await.unwrap();
        store.set_email_priority(id, "low").await.unwrap();
        let email = store.get_email(id).await.unwrap().unwrap();
        assert_eq!(email.category.as_deref(), Some("finance"));
        assert_eq!(email.priority.as_deref(), Some("low"));
    }

    #[tokio::test]
    async fn emails_listed_newest_first() {
        let store = store().await;
        let mut older = new_email("older", "b");
        older.date = Utc::now() - chrono::Duration::hours(5);
        store.insert_email(&older).await.unwrap();
        store.insert_email(&new_email("newer", "b")).await.unwrap();
        let emails = store.list_emails().await.unwrap();
        assert_eq!(emails[0].subject, "newer");
        assert_eq!(emails[1].subject, "older");
    }

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let store = store().await;
        store.seed_if_empty().await.unwrap();
        let emails = store.count_emails().await.unwrap();
        let templates = store.count_templates().await.unwrap();
        assert!(emails > 0);
        assert_eq!(templates, 5);
        store.seed_if_empty().await.unwrap();
        assert_eq!(store.count_emails().await.unwrap(), emails);
        assert_eq!(store.count_templates().await.unwrap(), templates);
    }

    #[tokio::test]
    async fn template_lookup_by_kind_and_partial_update() {
        let store = store().await;
        store.seed_if_empty().await.unwrap();
        let template = store
            .get_template_by_kind(crate::prompts::KIND_SUMMARY)
            .await
            .unwrap()
            .unwrap();
        assert!(template.template.contains("{subject}"));

        let updated = store
            .update_template(
                template.id,
                &TemplateUpdate {
                    template: Some("New body {subject}".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.template, "New body {subject}");
        assert_eq!(updated.name, template.name);
    }

    #[tokio::test]
    async fn draft_crud() {
        let store = store().await;
        let draft = store
            .insert_draft(&NewDraft {
                email_id: None,
                subject: "Re: Hello".into(),
                to_email: "sender@example.com".into(),
                body: "Hi there".into(),
            })
            .await
            .unwrap();
        assert!(draft.email_id.is_none());

        let updated = store
            .update_draft(
                draft.id,
                &DraftUpdate {
                    body: Some("Edited".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.body, "Edited");
        assert_eq!(updated.subject, "Re: Hello");

        assert!(store.delete_draft(draft.id).await.unwrap());
        assert!(store.get_draft(draft.id).await.unwrap().is_none());
        assert!(!store.delete_draft(draft.id).await.unwrap());
    }

    #[tokio::test]
    async fn chat_history_is_scoped_by_email() {
        let store = store().await;
        let id = store.insert_email(&new_email("a", "b")).await.unwrap();
        store.insert_chat_message("user", "hi", Some(id)).await.unwrap();
        store.insert_chat_message("assistant", "hello", Some(id)).await.unwrap();
        store.insert_chat_message("user", "general", None).await.unwrap();

        let scoped = store.list_chat_messages(Some(id)).await.unwrap();
        assert_eq!(scoped.len(), 2);
        assert_eq!(scoped[0].role, "user");

        let general = store.list_chat_messages(None).await.unwrap();
        assert_eq!(general.len(), 1);

        assert_eq!(store.clear_chat(Some(id)).await.unwrap(), 2);
        assert!(store.list_chat_messages(Some(id)).await.unwrap().is_empty());
        assert_eq!(store.list_chat_messages(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn on_disk_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        {
            let store = Store::new_local(&path).await.unwrap();
            store.insert_email(&new_email("persisted", "b")).await.unwrap();
        }
        let store = Store::new_local(&path).await.unwrap();
        assert_eq!(store.count_emails().await.unwrap(), 1);
    }
}
