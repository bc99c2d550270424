//! Message and embed data model
//!
//! Follows the Discord embed object shape:
//! https://discord.com/developers/docs/resources/message#embed-object

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ComposeError;

/// Discord platform limits for messages and embeds
pub mod limits {
    pub const CONTENT_MAX: usize = 2000;
    pub const EMBEDS_MAX: usize = 10;
    pub const TITLE_MAX: usize = 256;
    pub const DESCRIPTION_MAX: usize = 4096;
    pub const FIELDS_MAX: usize = 25;
    pub const FIELD_NAME_MAX: usize = 256;
    pub const FIELD_VALUE_MAX: usize = 1024;
    pub const FOOTER_TEXT_MAX: usize = 2048;
    pub const AUTHOR_NAME_MAX: usize = 256;
    pub const TOTAL_CHARS_MAX: usize = 6000;
}

/// A webhook message: plain text content plus ordered rich embeds.
///
/// The message has no identity of its own; it lives in memory during a
/// composer session and only the resulting send attempt is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

impl Message {
    /// Create a message with plain text content only.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// True when the message carries no visible text at all: no
    /// content and no embed with a title, description, or field.
    /// An empty message is not meaningfully sendable; callers should
    /// treat this as a warning rather than a hard error.
    pub fn is_empty(&self) -> bool {
        let content_empty = self
            .content
            .as_deref()
            .map_or(true, |c| c.trim().is_empty());
        content_empty && self.embeds.iter().all(Embed::is_empty)
    }

    /// Validate the message against Discord's platform limits before
    /// it reaches the network.
    pub fn check_limits(&self) -> Result<(), ComposeError> {
        if self.embeds.len() > limits::EMBEDS_MAX {
            return Err(ComposeError::TooManyEmbeds {
                limit: limits::EMBEDS_MAX,
            });
        }
        for embed in &self.embeds {
            if embed.fields.len() > limits::FIELDS_MAX {
                return Err(ComposeError::TooManyFields {
                    limit: limits::FIELDS_MAX,
                });
            }
        }
        Ok(())
    }
}

/// One rich content block within a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Accent color, shown as the embed's left border. Stored as a
    /// `#RRGGBB` hex string in documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,

    /// Ordered fields; ordering is meaningful and preserved end-to-end.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl Embed {
    /// The default embed a fresh composer session starts with.
    pub fn with_defaults() -> Self {
        Self {
            title: Some(String::new()),
            description: Some(String::new()),
            color: Some(Color::DEFAULT),
            ..Default::default()
        }
    }

    /// True when no part of the embed carries visible text.
    pub fn is_empty(&self) -> bool {
        let blank = |s: &Option<String>| s.as_deref().map_or(true, |v| v.trim().is_empty());
        blank(&self.title)
            && blank(&self.description)
            && self.fields.is_empty()
            && self.author.is_none()
            && self.footer.is_none()
            && self.thumbnail.is_none()
            && self.image.is_none()
    }
}

/// Embed author block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Embed footer block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Thumbnail or main image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedMedia {
    pub url: String,
}

/// A name/value pair within an embed. `inline` hints that adjacent
/// inline fields render side-by-side; the layout itself is Discord's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }

    /// The placeholder field added by the composer's "add field".
    pub fn placeholder() -> Self {
        Self::new("Field Name", "Field Value", true)
    }
}
