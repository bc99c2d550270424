//! Firmcast Core
//!
//! Message data model, color handling, and the composer that builds
//! Discord webhook messages from user edits.

mod color;
mod composer;
mod error;
mod message;

pub use color::Color;
pub use composer::{Composer, EmbedPatch, FieldPatch};
pub use error::ComposeError;
pub use message::{limits, Embed, EmbedAuthor, EmbedFooter, EmbedMedia, Field, Message};
