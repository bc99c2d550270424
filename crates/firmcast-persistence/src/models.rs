//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use firmcast_dispatch::{SendStatus, WebhookTarget};

/// Stored webhook target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRecord {
    pub id: String,
    pub firm_id: String,
    pub name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl WebhookRecord {
    /// View the record as a dispatch target.
    pub fn as_target(&self) -> WebhookTarget {
        WebhookTarget {
            id: self.id.clone(),
            name: self.name.clone(),
            url: self.url.clone(),
        }
    }
}

/// Reusable embed template; `content` is a message document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: String,
    pub firm_id: String,
    pub name: String,
    pub content: serde_json::Value,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

/// One row of the append-only send log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentMessageRecord {
    pub id: Option<i64>,
    pub webhook_id: String,
    pub content: serde_json::Value,
    pub status: SendStatus,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}
