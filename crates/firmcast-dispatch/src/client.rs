//! Webhook HTTP client
//!
//! One POST per call, bounded timeout, no retries. Retry policy is a
//! caller decision given Discord's per-webhook rate limits.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::DispatchError;
use crate::wire::WirePayload;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the webhook client.
#[derive(Debug, Clone)]
pub struct WebhookClientConfig {
    /// Bound on the whole request; a hung endpoint becomes a failed
    /// attempt instead of hanging the caller.
    pub timeout: Duration,

    /// Log the payload instead of performing the request.
    pub dry_run: bool,
}

impl Default for WebhookClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            dry_run: false,
        }
    }
}

/// Error body Discord returns on rejection; `retry_after` is seconds
/// on 429 responses.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    retry_after: Option<f64>,
}

/// HTTP client for executing Discord webhooks.
///
/// Uses the fire-and-forget execution mode (no `?wait=true`); Discord
/// answers 204 No Content on success.
pub struct WebhookClient {
    client: Client,
    config: WebhookClientConfig,
}

impl WebhookClient {
    pub fn new(config: WebhookClientConfig) -> Result<Self, DispatchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DispatchError::Network(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }

    /// Perform exactly one POST of the payload to `url`.
    pub async fn execute(&self, url: &str, payload: &WirePayload) -> Result<(), DispatchError> {
        if self.config.dry_run {
            let json = serde_json::to_string_pretty(payload)?;
            debug!(url = %url, "[DRY RUN] Would POST webhook payload:\n{}", json);
            return Ok(());
        }

        debug!(url = %url, "Executing webhook");
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let parsed: Option<RejectionBody> = serde_json::from_str(&body).ok();

        let retry_after_ms = if status.as_u16() == 429 {
            Some(
                parsed
                    .as_ref()
                    .and_then(|b| b.retry_after)
                    .map(|secs| (secs * 1000.0) as u64)
                    .unwrap_or(5000),
            )
        } else {
            None
        };

        let body = parsed
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or(body);

        Err(DispatchError::Rejected {
            status: status.as_u16(),
            body,
            retry_after_ms,
        })
    }
}
