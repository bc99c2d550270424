//! Send-attempt log repository
//!
//! The log is append-only: rows are inserted once and never updated.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::Row;

use firmcast_dispatch::SendStatus;

use crate::{error::Result, models::SentMessageRecord, Database};

/// Repository for the send-attempt log
pub struct SentMessageRepository<'a> {
    db: &'a Database,
}

impl<'a> SentMessageRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Append one attempt. Returns the new row id.
    pub async fn insert(&self, record: &SentMessageRecord) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO sent_messages (webhook_id, content, status, error_message, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.webhook_id)
        .bind(record.content.to_string())
        .bind(record.status.to_string())
        .bind(&record.error_message)
        .bind(record.created_at.to_rfc3339())
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Most recent attempts across all webhooks
    pub async fn recent(&self, limit: i64) -> Result<Vec<SentMessageRecord>> {
        let rows = sqlx::query("SELECT * FROM sent_messages ORDER BY created_at DESC LIMIT ?")
            .bind(limit)
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(Self::row_to_record).collect()
    }

    /// Attempts for one webhook, newest first
    pub async fn list_for_webhook(
        &self,
        webhook_id: &str,
        limit: i64,
    ) -> Result<Vec<SentMessageRecord>> {
        let rows = sqlx::query(
            "SELECT * FROM sent_messages WHERE webhook_id = ? ORDER BY created_at DESC LIMIT ?",
        )
        .bind(webhook_id)
        .bind(limit)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_record).collect()
    }

    /// Count attempts with the given status
    pub async fn count_by_status(&self, status: SendStatus) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM sent_messages WHERE status = ?")
            .bind(status.to_string())
            .fetch_one(self.db.pool())
            .await?;

        Ok(row.get::<i64, _>("count"))
    }

    fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<SentMessageRecord> {
        Ok(SentMessageRecord {
            id: Some(row.get("id")),
            webhook_id: row.get("webhook_id"),
            content: serde_json::from_str(row.get::<&str, _>("content"))?,
            status: SendStatus::from_str(row.get::<&str, _>("status"))
                .unwrap_or(SendStatus::Failed),
            error_message: row.get("error_message"),
            created_at: DateTime::parse_from_rfc3339(row.get::<&str, _>("created_at"))
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attempt(webhook: &str, status: SendStatus, error: Option<&str>) -> SentMessageRecord {
        SentMessageRecord {
            id: None,
            webhook_id: webhook.to_string(),
            content: json!({"content": "hello"}),
            status,
            error_message: error.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_recent() {
        let db = Database::in_memory().await.unwrap();
        let repo = SentMessageRepository::new(&db);

        repo.insert(&attempt("wh_1", SendStatus::Sent, None))
            .await
            .unwrap();
        repo.insert(&attempt("wh_1", SendStatus::Failed, Some("HTTP 400")))
            .await
            .unwrap();

        let recent = repo.recent(10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].content["content"], "hello");
    }

    #[tokio::test]
    async fn test_list_for_webhook_filters() {
        let db = Database::in_memory().await.unwrap();
        let repo = SentMessageRepository::new(&db);

        repo.insert(&attempt("wh_1", SendStatus::Sent, None))
            .await
            .unwrap();
        repo.insert(&attempt("wh_2", SendStatus::Sent, None))
            .await
            .unwrap();

        let listed = repo.list_for_webhook("wh_1", 10).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].webhook_id, "wh_1");
    }

    #[tokio::test]
    async fn test_count_by_status() {
        let db = Database::in_memory().await.unwrap();
        let repo = SentMessageRepository::new(&db);

        for _ in 0..3 {
            repo.insert(&attempt("wh_1", SendStatus::Sent, None))
                .await
                .unwrap();
        }
        repo.insert(&attempt("wh_1", SendStatus::Failed, Some("timeout")))
            .await
            .unwrap();

        assert_eq!(repo.count_by_status(SendStatus::Sent).await.unwrap(), 3);
        assert_eq!(repo.count_by_status(SendStatus::Failed).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failed_attempt_keeps_error_message() {
        let db = Database::in_memory().await.unwrap();
        let repo = SentMessageRepository::new(&db);

        repo.insert(&attempt("wh_1", SendStatus::Failed, Some("HTTP 400: Invalid Form Body")))
            .await
            .unwrap();

        let recent = repo.recent(1).await.unwrap();
        assert_eq!(recent[0].status, SendStatus::Failed);
        assert_eq!(
            recent[0].error_message.as_deref(),
            Some("HTTP 400: Invalid Form Body")
        );
    }
}
