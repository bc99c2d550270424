//! Send-attempt outcome records and the sink seam
//!
//! The dispatcher hands each completed attempt to an `OutcomeSink`
//! instead of writing storage itself, so it stays testable without a
//! database and a persistence failure can never mask a send failure.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SinkError;

/// Terminal status of one dispatch invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SendStatus {
    Sent,
    Failed,
}

impl std::fmt::Display for SendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SendStatus::Sent => write!(f, "sent"),
            SendStatus::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for SendStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent" => Ok(SendStatus::Sent),
            "failed" => Ok(SendStatus::Failed),
            other => Err(format!("unknown send status: {other}")),
        }
    }
}

/// Append-only record of one dispatch attempt. Created exactly once
/// per attempt and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendAttempt {
    pub webhook_id: String,
    /// Snapshot of the composed message document at send time.
    pub message_snapshot: serde_json::Value,
    pub status: SendStatus,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Destination for completed send attempts. Implemented by the
/// persistence layer; swapped for `NullSink` in tests and one-off use.
#[async_trait]
pub trait OutcomeSink: Send + Sync {
    async fn record(&self, attempt: &SendAttempt) -> Result<(), SinkError>;
}

/// Sink that discards attempts.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

#[async_trait]
impl OutcomeSink for NullSink {
    async fn record(&self, _attempt: &SendAttempt) -> Result<(), SinkError> {
        Ok(())
    }
}
