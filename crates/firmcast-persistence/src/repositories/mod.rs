//! Table repositories

mod sent_messages;
mod templates;
mod webhooks;

pub use sent_messages::SentMessageRepository;
pub use templates::TemplateRepository;
pub use webhooks::WebhookRepository;
