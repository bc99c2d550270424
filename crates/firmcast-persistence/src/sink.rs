//! SQLite-backed outcome sink
//!
//! Bridges the dispatcher's injectable sink seam to the sent_messages
//! table.

use async_trait::async_trait;

use firmcast_dispatch::{OutcomeSink, SendAttempt, SinkError};

use crate::models::SentMessageRecord;
use crate::repositories::SentMessageRepository;
use crate::Database;

/// Writes each completed send attempt to the sent_messages table.
#[derive(Clone)]
pub struct SqliteOutcomeSink {
    db: Database,
}

impl SqliteOutcomeSink {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OutcomeSink for SqliteOutcomeSink {
    async fn record(&self, attempt: &SendAttempt) -> Result<(), SinkError> {
        let record = SentMessageRecord {
            id: None,
            webhook_id: attempt.webhook_id.clone(),
            content: attempt.message_snapshot.clone(),
            status: attempt.status,
            error_message: attempt.error_message.clone(),
            created_at: attempt.created_at,
        };

        SentMessageRepository::new(&self.db)
            .insert(&record)
            .await
            .map_err(|e| SinkError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use firmcast_dispatch::SendStatus;
    use serde_json::json;

    #[tokio::test]
    async fn test_sink_appends_to_log() {
        let db = Database::in_memory().await.unwrap();
        let sink = SqliteOutcomeSink::new(db.clone());

        let attempt = SendAttempt {
            webhook_id: "wh_9".to_string(),
            message_snapshot: json!({"content": "ping"}),
            status: SendStatus::Sent,
            error_message: None,
            created_at: Utc::now(),
        };
        sink.record(&attempt).await.unwrap();

        let repo = SentMessageRepository::new(&db);
        let recent = repo.recent(5).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].webhook_id, "wh_9");
        assert_eq!(recent[0].status, SendStatus::Sent);
    }
}
