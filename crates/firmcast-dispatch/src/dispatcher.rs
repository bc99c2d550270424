//! Message dispatcher
//!
//! One invocation runs the linear sequence validate → serialize →
//! send → record outcome. Once sending starts, exactly one attempt
//! record is produced; a cancelled (dropped) invocation produces none.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use firmcast_core::{limits, ComposeError, Message};

use crate::client::WebhookClient;
use crate::error::{DispatchError, SinkError};
use crate::outcome::{OutcomeSink, SendAttempt, SendStatus};
use crate::target::{is_valid_webhook_url, WebhookTarget};
use crate::wire::WirePayload;

/// Result of one dispatch invocation that got past validation.
///
/// The attempt is the primary outcome; `sink_error` reports a failed
/// outcome write independently so it never masks the send result.
#[derive(Debug)]
pub struct DispatchReport {
    pub attempt: SendAttempt,
    /// The send error when the attempt failed.
    pub error: Option<DispatchError>,
    pub sink_error: Option<SinkError>,
}

impl DispatchReport {
    pub fn is_sent(&self) -> bool {
        self.attempt.status == SendStatus::Sent
    }
}

/// Sends messages to webhook targets and records every attempt.
pub struct Dispatcher {
    client: WebhookClient,
    sink: Arc<dyn OutcomeSink>,
    validate_urls: bool,
}

impl Dispatcher {
    pub fn new(client: WebhookClient, sink: Arc<dyn OutcomeSink>) -> Self {
        Self {
            client,
            sink,
            validate_urls: true,
        }
    }

    /// Disable the Discord URL shape check, for driving the dispatcher
    /// against local stand-in endpoints.
    pub fn with_url_validation(mut self, enabled: bool) -> Self {
        self.validate_urls = enabled;
        self
    }

    /// Dispatch `message` to `target`.
    ///
    /// Validation failures return `Err` before any network I/O and
    /// leave no attempt record. Past validation the invocation always
    /// yields exactly one `SendAttempt`, handed to the outcome sink
    /// and returned in the report.
    pub async fn send(
        &self,
        message: &Message,
        target: &WebhookTarget,
    ) -> Result<DispatchReport, DispatchError> {
        // Validating
        if self.validate_urls && !is_valid_webhook_url(&target.url) {
            return Err(DispatchError::InvalidWebhookUrl(target.url.clone()));
        }
        message.check_limits().map_err(|e| match e {
            ComposeError::TooManyEmbeds { limit } => DispatchError::TooManyEmbeds { limit },
            ComposeError::TooManyFields { limit } => DispatchError::TooManyFields { limit },
            other => DispatchError::Serialization(other.to_string()),
        })?;
        if message.is_empty() {
            // Lenient by design: Discord decides what an empty message
            // means, we only flag it.
            warn!(webhook = %target.name, "Dispatching a message with no visible content");
        }

        let snapshot = serde_json::to_value(message)?;
        let payload = WirePayload::from(message);

        // Sending
        let result = self.client.execute(&target.url, &payload).await;

        let (status, error) = match result {
            Ok(()) => (SendStatus::Sent, None),
            Err(e) => (SendStatus::Failed, Some(e)),
        };

        let attempt = SendAttempt {
            webhook_id: target.id.clone(),
            message_snapshot: snapshot,
            status,
            error_message: error.as_ref().map(|e| e.to_string()),
            created_at: Utc::now(),
        };

        let sink_error = match self.sink.record(&attempt).await {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "Failed to record send attempt");
                Some(e)
            }
        };

        match status {
            SendStatus::Sent => info!(webhook = %target.name, "Webhook message sent"),
            SendStatus::Failed => warn!(
                webhook = %target.name,
                error = %attempt.error_message.as_deref().unwrap_or("unknown"),
                "Webhook message failed"
            ),
        }

        Ok(DispatchReport {
            attempt,
            error,
            sink_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::WebhookClientConfig;
    use crate::outcome::NullSink;
    use std::sync::Mutex;

    fn dry_run_dispatcher(sink: Arc<dyn OutcomeSink>) -> Dispatcher {
        let client = WebhookClient::new(WebhookClientConfig {
            dry_run: true,
            ..Default::default()
        })
        .unwrap();
        Dispatcher::new(client, sink)
    }

    fn target() -> WebhookTarget {
        WebhookTarget {
            id: "wh_1".to_string(),
            name: "announcements".to_string(),
            url: "https://discord.com/api/webhooks/123456789012345678/abcDEF-123_xyz".to_string(),
        }
    }

    /// Sink capturing every recorded attempt.
    #[derive(Default)]
    struct CapturingSink {
        attempts: Mutex<Vec<SendAttempt>>,
    }

    #[async_trait::async_trait]
    impl OutcomeSink for CapturingSink {
        async fn record(&self, attempt: &SendAttempt) -> Result<(), SinkError> {
            self.attempts.lock().unwrap().push(attempt.clone());
            Ok(())
        }
    }

    /// Sink that always fails.
    struct FailingSink;

    #[async_trait::async_trait]
    impl OutcomeSink for FailingSink {
        async fn record(&self, _attempt: &SendAttempt) -> Result<(), SinkError> {
            Err(SinkError("disk full".to_string()))
        }
    }

    #[tokio::test]
    async fn test_invalid_url_fails_before_any_attempt() {
        let sink = Arc::new(CapturingSink::default());
        let dispatcher = dry_run_dispatcher(sink.clone());

        let bad = WebhookTarget {
            url: "https://discordapp.com/api/webhooks/123/token".to_string(),
            ..target()
        };
        let result = dispatcher.send(&Message::text("hi"), &bad).await;
        assert!(matches!(result, Err(DispatchError::InvalidWebhookUrl(_))));
        assert!(sink.attempts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_too_many_embeds_rejected_before_send() {
        let sink = Arc::new(CapturingSink::default());
        let dispatcher = dry_run_dispatcher(sink.clone());

        let message = Message {
            content: None,
            embeds: vec![Default::default(); limits::EMBEDS_MAX + 1],
        };
        let result = dispatcher.send(&message, &target()).await;
        assert!(matches!(result, Err(DispatchError::TooManyEmbeds { .. })));
        assert!(sink.attempts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_successful_send_records_one_attempt() {
        let sink = Arc::new(CapturingSink::default());
        let dispatcher = dry_run_dispatcher(sink.clone());

        let report = dispatcher
            .send(&Message::text("launch"), &target())
            .await
            .unwrap();
        assert!(report.is_sent());
        assert!(report.error.is_none());
        assert!(report.sink_error.is_none());

        let attempts = sink.attempts.lock().unwrap();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].status, SendStatus::Sent);
        assert_eq!(attempts[0].webhook_id, "wh_1");
        assert!(attempts[0].error_message.is_none());
    }

    #[tokio::test]
    async fn test_sink_failure_does_not_mask_send_result() {
        let dispatcher = dry_run_dispatcher(Arc::new(FailingSink));

        let report = dispatcher
            .send(&Message::text("launch"), &target())
            .await
            .unwrap();
        assert!(report.is_sent());
        assert!(report.sink_error.is_some());
    }

    #[tokio::test]
    async fn test_snapshot_captures_composed_document() {
        let sink = Arc::new(CapturingSink::default());
        let dispatcher = dry_run_dispatcher(sink.clone());

        let message = Message::text("snapshot me");
        dispatcher.send(&message, &target()).await.unwrap();

        let attempts = sink.attempts.lock().unwrap();
        assert_eq!(attempts[0].message_snapshot["content"], "snapshot me");
    }

    #[tokio::test]
    async fn test_null_sink_accepts_attempts() {
        let dispatcher = dry_run_dispatcher(Arc::new(NullSink));
        let report = dispatcher.send(&Message::text("x"), &target()).await.unwrap();
        assert!(report.sink_error.is_none());
    }
}
