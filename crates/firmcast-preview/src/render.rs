//! Message-to-preview transform
//!
//! `render` is a pure function: no network, no clock, no hidden state.
//! Calling it twice on the same message yields structurally equal
//! trees, which is what makes it usable as a WYSIWYG check.

use serde::Serialize;

use firmcast_core::{Color, Embed, Message};

/// Display-ready rendering of a whole message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessagePreview {
    /// Plain text shown above the embeds, when present.
    pub content: Option<String>,
    pub embeds: Vec<EmbedPreview>,
}

/// One embed as Discord would present it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedPreview {
    /// Left-border accent color; the default accent when the embed has
    /// no (valid) color of its own.
    pub accent: Color,
    pub author: Option<AuthorBlock>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<FieldBlock>,
    pub footer: Option<FooterBlock>,
    pub thumbnail_url: Option<String>,
    pub image_url: Option<String>,
}

/// Author header, rendered only when a name is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorBlock {
    pub name: String,
    pub url: Option<String>,
    pub icon_url: Option<String>,
}

/// Footer line, rendered only when text is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterBlock {
    pub text: String,
    pub icon_url: Option<String>,
}

/// One field with its layout hint. The `inline` flag is passed through
/// for the rendering surface to act on; no column-wrapping here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldBlock {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Render a message into its preview tree.
pub fn render(message: &Message) -> MessagePreview {
    MessagePreview {
        content: non_blank(message.content.as_deref()),
        embeds: message.embeds.iter().map(render_embed).collect(),
    }
}

fn render_embed(embed: &Embed) -> EmbedPreview {
    let author = embed
        .author
        .as_ref()
        .filter(|a| !a.name.trim().is_empty())
        .map(|a| AuthorBlock {
            name: a.name.clone(),
            url: a.url.clone(),
            icon_url: a.icon_url.clone(),
        });

    let footer = embed
        .footer
        .as_ref()
        .filter(|f| !f.text.trim().is_empty())
        .map(|f| FooterBlock {
            text: f.text.clone(),
            icon_url: f.icon_url.clone(),
        });

    EmbedPreview {
        accent: embed.color.unwrap_or(Color::DEFAULT),
        author,
        title: non_blank(embed.title.as_deref()),
        description: non_blank(embed.description.as_deref()),
        fields: embed
            .fields
            .iter()
            .map(|f| FieldBlock {
                name: f.name.clone(),
                value: f.value.clone(),
                inline: f.inline,
            })
            .collect(),
        footer,
        thumbnail_url: embed.thumbnail.as_ref().map(|m| m.url.clone()),
        image_url: embed.image.as_ref().map(|m| m.url.clone()),
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use firmcast_core::{EmbedAuthor, EmbedFooter, EmbedMedia, Field};

    fn sample_message(embeds: usize, fields_per_embed: usize) -> Message {
        Message {
            content: Some("heads up".to_string()),
            embeds: (0..embeds)
                .map(|e| Embed {
                    title: Some(format!("embed {e}")),
                    description: Some("body".to_string()),
                    color: Some(Color(0x57F287)),
                    author: None,
                    footer: None,
                    thumbnail: None,
                    image: None,
                    fields: (0..fields_per_embed)
                        .map(|f| Field::new(format!("f{f}"), "v", f % 2 == 0))
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        for (embeds, fields) in [(0, 0), (1, 0), (3, 5), (10, 25)] {
            let message = sample_message(embeds, fields);
            let first = render(&message);
            let second = render(&message);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_accent_falls_back_to_default() {
        let message = Message {
            content: None,
            embeds: vec![Embed::default()],
        };
        let preview = render(&message);
        assert_eq!(preview.embeds[0].accent, Color::DEFAULT);
    }

    #[test]
    fn test_author_block_requires_name() {
        let mut embed = Embed::default();
        embed.author = Some(EmbedAuthor {
            name: "  ".to_string(),
            url: None,
            icon_url: None,
        });
        let preview = render(&Message {
            content: None,
            embeds: vec![embed.clone()],
        });
        assert!(preview.embeds[0].author.is_none());

        embed.author = Some(EmbedAuthor {
            name: "PR Desk".to_string(),
            url: Some("https://example.com".to_string()),
            icon_url: None,
        });
        let preview = render(&Message {
            content: None,
            embeds: vec![embed],
        });
        assert_eq!(preview.embeds[0].author.as_ref().unwrap().name, "PR Desk");
    }

    #[test]
    fn test_footer_block_requires_text() {
        let mut embed = Embed::default();
        embed.footer = Some(EmbedFooter {
            text: String::new(),
            icon_url: Some("https://example.com/i.png".to_string()),
        });
        let preview = render(&Message {
            content: None,
            embeds: vec![embed],
        });
        assert!(preview.embeds[0].footer.is_none());
    }

    #[test]
    fn test_blank_title_and_description_dropped() {
        let embed = Embed {
            title: Some(String::new()),
            description: Some("  ".to_string()),
            ..Default::default()
        };
        let preview = render(&Message {
            content: None,
            embeds: vec![embed],
        });
        assert!(preview.embeds[0].title.is_none());
        assert!(preview.embeds[0].description.is_none());
    }

    #[test]
    fn test_inline_flag_passed_through_in_order() {
        let embed = Embed {
            fields: vec![
                Field::new("a", "1", true),
                Field::new("b", "2", false),
                Field::new("c", "3", true),
            ],
            ..Default::default()
        };
        let preview = render(&Message {
            content: None,
            embeds: vec![embed],
        });

        let flags: Vec<(String, bool)> = preview.embeds[0]
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.inline))
            .collect();
        assert_eq!(
            flags,
            vec![
                ("a".to_string(), true),
                ("b".to_string(), false),
                ("c".to_string(), true)
            ]
        );
    }

    #[test]
    fn test_preview_serializes_accent_as_hex() {
        let preview = render(&Message {
            content: None,
            embeds: vec![Embed::default()],
        });
        let json = serde_json::to_value(&preview).unwrap();
        assert_eq!(json["embeds"][0]["accent"], "#5865F2");
    }

    #[test]
    fn test_media_urls_surface() {
        let embed = Embed {
            thumbnail: Some(EmbedMedia {
                url: "https://example.com/t.png".to_string(),
            }),
            image: Some(EmbedMedia {
                url: "https://example.com/i.png".to_string(),
            }),
            ..Default::default()
        };
        let preview = render(&Message {
            content: None,
            embeds: vec![embed],
        });
        assert_eq!(
            preview.embeds[0].thumbnail_url.as_deref(),
            Some("https://example.com/t.png")
        );
        assert_eq!(
            preview.embeds[0].image_url.as_deref(),
            Some("https://example.com/i.png")
        );
    }
}
