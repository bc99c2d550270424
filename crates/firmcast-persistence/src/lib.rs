//! Firmcast Persistence
//!
//! SQLite storage for webhook targets, reusable embed templates, and
//! the append-only send-attempt log.

mod database;
mod error;
mod models;
mod repositories;
mod sink;

pub use database::Database;
pub use error::{PersistenceError, Result};
pub use models::{SentMessageRecord, TemplateRecord, WebhookRecord};
pub use repositories::{SentMessageRepository, TemplateRepository, WebhookRepository};
pub use sink::SqliteOutcomeSink;
