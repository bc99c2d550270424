//! Firmcast Dispatch
//!
//! Takes a composed message and a webhook target, serializes to
//! Discord's wire format, performs exactly one HTTP POST, and records
//! the outcome through an injectable sink.

mod client;
mod dispatcher;
mod error;
mod outcome;
mod target;
mod wire;

pub use client::{WebhookClient, WebhookClientConfig};
pub use dispatcher::{DispatchReport, Dispatcher};
pub use error::{DispatchError, SinkError};
pub use outcome::{NullSink, OutcomeSink, SendAttempt, SendStatus};
pub use target::{is_valid_webhook_url, WebhookTarget};
pub use wire::{WireEmbed, WireField, WirePayload};
