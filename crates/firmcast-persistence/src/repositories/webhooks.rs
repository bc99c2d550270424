//! Webhook target repository

use chrono::{DateTime, Utc};
use sqlx::Row;

use crate::{error::Result, models::WebhookRecord, Database, PersistenceError};

/// Repository for stored webhook targets
pub struct WebhookRepository<'a> {
    db: &'a Database,
}

impl<'a> WebhookRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a new webhook target
    pub async fn insert(&self, webhook: &WebhookRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO webhooks (id, firm_id, name, url, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&webhook.id)
        .bind(&webhook.firm_id)
        .bind(&webhook.name)
        .bind(&webhook.url)
        .bind(webhook.created_at.to_rfc3339())
        .execute(self.db.pool())
        .await?;

        Ok(())
    }

    /// Get a webhook by id
    pub async fn get(&self, id: &str) -> Result<WebhookRecord> {
        let row = sqlx::query("SELECT * FROM webhooks WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?
            .ok_or_else(|| PersistenceError::NotFound(format!("webhook {id}")))?;

        Self::row_to_webhook(&row)
    }

    /// List all webhooks owned by a firm
    pub async fn list_for_firm(&self, firm_id: &str) -> Result<Vec<WebhookRecord>> {
        let rows = sqlx::query(
            "SELECT * FROM webhooks WHERE firm_id = ? ORDER BY created_at ASC",
        )
        .bind(firm_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_webhook).collect()
    }

    /// Delete a webhook
    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM webhooks WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::NotFound(format!("webhook {id}")));
        }
        Ok(())
    }

    fn row_to_webhook(row: &sqlx::sqlite::SqliteRow) -> Result<WebhookRecord> {
        Ok(WebhookRecord {
            id: row.get("id"),
            firm_id: row.get("firm_id"),
            name: row.get("name"),
            url: row.get("url"),
            created_at: DateTime::parse_from_rfc3339(row.get::<&str, _>("created_at"))
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
