//! Dispatch error types

use thiserror::Error;

/// Errors from validating and sending a webhook message.
///
/// Validation variants are raised before any network I/O and never
/// produce a send-attempt record; the rest describe a completed,
/// failed attempt.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Invalid webhook URL: {0}")]
    InvalidWebhookUrl(String),

    #[error("Too many embeds: maximum is {limit}")]
    TooManyEmbeds { limit: usize },

    #[error("Too many fields in one embed: maximum is {limit}")]
    TooManyFields { limit: usize },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Discord rejected the message: {status} - {body}")]
    Rejected {
        status: u16,
        body: String,
        /// Present on 429 responses so a higher layer can decide
        /// whether to retry; the dispatcher itself never retries.
        retry_after_ms: Option<u64>,
    },

    #[error("Payload serialization failed: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DispatchError::Timeout
        } else {
            DispatchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        DispatchError::Serialization(err.to_string())
    }
}

/// Failure from the outcome sink. Reported alongside the primary send
/// result, never in place of it.
#[derive(Debug, Error)]
#[error("Outcome sink failed: {0}")]
pub struct SinkError(pub String);
