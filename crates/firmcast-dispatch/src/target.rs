//! Webhook targets and URL validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shape of a Discord-issued webhook endpoint:
/// `https://discord.com/api/webhooks/{numeric_id}/{token}`.
static WEBHOOK_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://discord\.com/api/webhooks/\d+/[A-Za-z0-9_-]+$")
        .expect("webhook URL pattern is valid")
});

/// Check that a URL matches the Discord webhook shape. Run before any
/// network I/O so malformed URLs fail fast.
pub fn is_valid_webhook_url(url: &str) -> bool {
    WEBHOOK_URL.is_match(url)
}

/// A stored webhook destination. Owned by the persistence layer; the
/// dispatcher only consumes it as an opaque destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookTarget {
    pub id: String,
    pub name: String,
    pub url: String,
}
