//! Message composer
//!
//! Owns the message being edited and exposes bounds-checked mutation
//! operations. Updates go through closed patch enums so an invalid
//! field name is unrepresentable rather than a silent no-op.

use crate::color::Color;
use crate::error::ComposeError;
use crate::message::{limits, Embed, EmbedAuthor, EmbedFooter, EmbedMedia, Field, Message};

/// A typed update to one embed.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbedPatch {
    SetTitle(String),
    SetDescription(String),
    SetColor(Color),
    SetAuthor(EmbedAuthor),
    ClearAuthor,
    SetFooter(EmbedFooter),
    ClearFooter,
    SetThumbnail(EmbedMedia),
    ClearThumbnail,
    SetImage(EmbedMedia),
    ClearImage,
}

/// A typed update to one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch {
    SetName(String),
    SetValue(String),
    SetInline(bool),
}

/// Composer session owning the message under edit.
///
/// A new session starts with one default embed, matching the embed
/// builder's initial state, and the session always keeps at least one
/// embed: `remove_embed` refuses to remove the last one.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    message: Message,
}

impl Composer {
    /// Start a session with empty content and one default embed.
    pub fn new() -> Self {
        Self {
            message: Message {
                content: Some(String::new()),
                embeds: vec![Embed::with_defaults()],
            },
        }
    }

    /// Resume a session from an existing message (e.g. a saved
    /// template). An embed-less message gets the default embed so the
    /// at-least-one invariant holds.
    pub fn from_message(mut message: Message) -> Self {
        if message.embeds.is_empty() {
            message.embeds.push(Embed::with_defaults());
        }
        Self { message }
    }

    /// The current message value.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Finish the session and take the message.
    pub fn into_message(self) -> Message {
        self.message
    }

    /// Replace the plain text content shown above the embeds.
    pub fn set_content(&mut self, text: impl Into<String>) {
        self.message.content = Some(text.into());
    }

    /// Append a new default embed. Returns its index.
    pub fn add_embed(&mut self) -> Result<usize, ComposeError> {
        if self.message.embeds.len() >= limits::EMBEDS_MAX {
            return Err(ComposeError::TooManyEmbeds {
                limit: limits::EMBEDS_MAX,
            });
        }
        self.message.embeds.push(Embed::with_defaults());
        Ok(self.message.embeds.len() - 1)
    }

    /// Remove the embed at `index`. The last remaining embed cannot be
    /// removed.
    pub fn remove_embed(&mut self, index: usize) -> Result<(), ComposeError> {
        let len = self.message.embeds.len();
        if index >= len {
            return Err(ComposeError::EmbedIndexOutOfRange { index, len });
        }
        if len == 1 {
            return Err(ComposeError::LastEmbed);
        }
        self.message.embeds.remove(index);
        Ok(())
    }

    /// Apply a typed patch to the embed at `index`.
    pub fn update_embed(&mut self, index: usize, patch: EmbedPatch) -> Result<(), ComposeError> {
        let embed = self.embed_mut(index)?;
        match patch {
            EmbedPatch::SetTitle(title) => embed.title = Some(title),
            EmbedPatch::SetDescription(description) => embed.description = Some(description),
            EmbedPatch::SetColor(color) => embed.color = Some(color),
            EmbedPatch::SetAuthor(author) => embed.author = Some(author),
            EmbedPatch::ClearAuthor => embed.author = None,
            EmbedPatch::SetFooter(footer) => embed.footer = Some(footer),
            EmbedPatch::ClearFooter => embed.footer = None,
            EmbedPatch::SetThumbnail(media) => embed.thumbnail = Some(media),
            EmbedPatch::ClearThumbnail => embed.thumbnail = None,
            EmbedPatch::SetImage(media) => embed.image = Some(media),
            EmbedPatch::ClearImage => embed.image = None,
        }
        Ok(())
    }

    /// Append a placeholder field to the embed at `embed_index`.
    /// Returns the new field's index.
    pub fn add_field(&mut self, embed_index: usize) -> Result<usize, ComposeError> {
        let embed = self.embed_mut(embed_index)?;
        if embed.fields.len() >= limits::FIELDS_MAX {
            return Err(ComposeError::TooManyFields {
                limit: limits::FIELDS_MAX,
            });
        }
        embed.fields.push(Field::placeholder());
        Ok(embed.fields.len() - 1)
    }

    /// Apply a typed patch to one field.
    pub fn update_field(
        &mut self,
        embed_index: usize,
        field_index: usize,
        patch: FieldPatch,
    ) -> Result<(), ComposeError> {
        let field = self.field_mut(embed_index, field_index)?;
        match patch {
            FieldPatch::SetName(name) => field.name = name,
            FieldPatch::SetValue(value) => field.value = value,
            FieldPatch::SetInline(inline) => field.inline = inline,
        }
        Ok(())
    }

    /// Remove one field from an embed.
    pub fn remove_field(
        &mut self,
        embed_index: usize,
        field_index: usize,
    ) -> Result<(), ComposeError> {
        let embed = self.embed_mut(embed_index)?;
        let len = embed.fields.len();
        if field_index >= len {
            return Err(ComposeError::FieldIndexOutOfRange {
                index: field_index,
                len,
            });
        }
        embed.fields.remove(field_index);
        Ok(())
    }

    fn embed_mut(&mut self, index: usize) -> Result<&mut Embed, ComposeError> {
        let len = self.message.embeds.len();
        self.message
            .embeds
            .get_mut(index)
            .ok_or(ComposeError::EmbedIndexOutOfRange { index, len })
    }

    fn field_mut(
        &mut self,
        embed_index: usize,
        field_index: usize,
    ) -> Result<&mut Field, ComposeError> {
        let embed = self.embed_mut(embed_index)?;
        let len = embed.fields.len();
        embed
            .fields
            .get_mut(field_index)
            .ok_or(ComposeError::FieldIndexOutOfRange {
                index: field_index,
                len,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_one_default_embed() {
        let composer = Composer::new();
        assert_eq!(composer.message().embeds.len(), 1);
        assert_eq!(
            composer.message().embeds[0].color,
            Some(Color::DEFAULT)
        );
    }

    #[test]
    fn test_set_content() {
        let mut composer = Composer::new();
        composer.set_content("Announcement");
        assert_eq!(
            composer.message().content.as_deref(),
            Some("Announcement")
        );
    }

    #[test]
    fn test_add_embed_returns_index() {
        let mut composer = Composer::new();
        assert_eq!(composer.add_embed().unwrap(), 1);
        assert_eq!(composer.add_embed().unwrap(), 2);
        assert_eq!(composer.message().embeds.len(), 3);
    }

    #[test]
    fn test_add_embed_respects_limit() {
        let mut composer = Composer::new();
        for _ in 1..limits::EMBEDS_MAX {
            composer.add_embed().unwrap();
        }
        assert_eq!(
            composer.add_embed(),
            Err(ComposeError::TooManyEmbeds {
                limit: limits::EMBEDS_MAX
            })
        );
    }

    #[test]
    fn test_remove_embed_out_of_range_leaves_state_unchanged() {
        let mut composer = Composer::new();
        composer.add_embed().unwrap();
        let before = composer.message().clone();

        let result = composer.remove_embed(5);
        assert_eq!(
            result,
            Err(ComposeError::EmbedIndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(composer.message(), &before);
    }

    #[test]
    fn test_remove_last_embed_refused() {
        let mut composer = Composer::new();
        assert_eq!(composer.remove_embed(0), Err(ComposeError::LastEmbed));
        assert_eq!(composer.message().embeds.len(), 1);
    }

    #[test]
    fn test_update_embed_patches() {
        let mut composer = Composer::new();
        composer
            .update_embed(0, EmbedPatch::SetTitle("Hello".to_string()))
            .unwrap();
        composer
            .update_embed(0, EmbedPatch::SetColor(Color(0xED4245)))
            .unwrap();
        composer
            .update_embed(
                0,
                EmbedPatch::SetAuthor(EmbedAuthor {
                    name: "PR Desk".to_string(),
                    url: None,
                    icon_url: None,
                }),
            )
            .unwrap();

        let embed = &composer.message().embeds[0];
        assert_eq!(embed.title.as_deref(), Some("Hello"));
        assert_eq!(embed.color, Some(Color(0xED4245)));
        assert_eq!(embed.author.as_ref().unwrap().name, "PR Desk");

        composer.update_embed(0, EmbedPatch::ClearAuthor).unwrap();
        assert!(composer.message().embeds[0].author.is_none());
    }

    #[test]
    fn test_update_embed_out_of_range() {
        let mut composer = Composer::new();
        let result = composer.update_embed(3, EmbedPatch::SetTitle("x".to_string()));
        assert_eq!(
            result,
            Err(ComposeError::EmbedIndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_field_lifecycle() {
        let mut composer = Composer::new();
        let idx = composer.add_field(0).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(composer.message().embeds[0].fields[0], Field::placeholder());

        composer
            .update_field(0, 0, FieldPatch::SetName("Budget".to_string()))
            .unwrap();
        composer
            .update_field(0, 0, FieldPatch::SetInline(false))
            .unwrap();
        let field = &composer.message().embeds[0].fields[0];
        assert_eq!(field.name, "Budget");
        assert!(!field.inline);

        composer.remove_field(0, 0).unwrap();
        assert!(composer.message().embeds[0].fields.is_empty());
    }

    #[test]
    fn test_field_index_out_of_range() {
        let mut composer = Composer::new();
        assert_eq!(
            composer.update_field(0, 2, FieldPatch::SetInline(true)),
            Err(ComposeError::FieldIndexOutOfRange { index: 2, len: 0 })
        );
        assert_eq!(
            composer.remove_field(0, 0),
            Err(ComposeError::FieldIndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_add_field_respects_limit() {
        let mut composer = Composer::new();
        for _ in 0..limits::FIELDS_MAX {
            composer.add_field(0).unwrap();
        }
        assert_eq!(
            composer.add_field(0),
            Err(ComposeError::TooManyFields {
                limit: limits::FIELDS_MAX
            })
        );
    }

    #[test]
    fn test_field_order_preserved() {
        let mut composer = Composer::new();
        for name in ["first", "second", "third"] {
            let i = composer.add_field(0).unwrap();
            composer
                .update_field(0, i, FieldPatch::SetName(name.to_string()))
                .unwrap();
        }
        composer.remove_field(0, 1).unwrap();

        let names: Vec<&str> = composer.message().embeds[0]
            .fields
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "third"]);
    }

    #[test]
    fn test_from_message_restores_default_embed() {
        let composer = Composer::from_message(Message::text("bare"));
        assert_eq!(composer.message().embeds.len(), 1);
    }
}
