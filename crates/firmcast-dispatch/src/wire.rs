//! Discord wire format
//!
//! Serde structs matching the documented webhook execution payload.
//! Optional keys that are empty or unset are omitted rather than sent
//! as empty strings; Discord's parser tolerates missing keys but
//! rejects some empty ones.

use serde::Serialize;

use firmcast_core::{Embed, Message};

/// Top-level webhook execution payload.
#[derive(Debug, Clone, Serialize)]
pub struct WirePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<WireEmbed>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireEmbed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 24-bit integer, converted from the document's hex string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<WireAuthor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<WireFooter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<WireMedia>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<WireMedia>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<WireField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireFooter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireMedia {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl From<&Message> for WirePayload {
    fn from(message: &Message) -> Self {
        Self {
            content: non_blank(message.content.as_deref()),
            embeds: message.embeds.iter().map(WireEmbed::from).collect(),
        }
    }
}

impl From<&Embed> for WireEmbed {
    fn from(embed: &Embed) -> Self {
        let author = embed
            .author
            .as_ref()
            .filter(|a| !a.name.trim().is_empty())
            .map(|a| WireAuthor {
                name: a.name.clone(),
                url: non_blank(a.url.as_deref()),
                icon_url: non_blank(a.icon_url.as_deref()),
            });

        let footer = embed
            .footer
            .as_ref()
            .filter(|f| !f.text.trim().is_empty())
            .map(|f| WireFooter {
                text: f.text.clone(),
                icon_url: non_blank(f.icon_url.as_deref()),
            });

        Self {
            title: non_blank(embed.title.as_deref()),
            description: non_blank(embed.description.as_deref()),
            color: embed.color.map(|c| c.to_wire()),
            author,
            footer,
            thumbnail: embed
                .thumbnail
                .as_ref()
                .filter(|m| !m.url.trim().is_empty())
                .map(|m| WireMedia { url: m.url.clone() }),
            image: embed
                .image
                .as_ref()
                .filter(|m| !m.url.trim().is_empty())
                .map(|m| WireMedia { url: m.url.clone() }),
            // Order preserved exactly as composed.
            fields: embed
                .fields
                .iter()
                .map(|f| WireField {
                    name: f.name.clone(),
                    value: f.value.clone(),
                    inline: f.inline,
                })
                .collect(),
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty()).map(str::to_string)
}
