//! Composer error types

use thiserror::Error;

/// Errors from composer operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("Embed index {index} out of range (message has {len} embeds)")]
    EmbedIndexOutOfRange { index: usize, len: usize },

    #[error("Field index {index} out of range (embed has {len} fields)")]
    FieldIndexOutOfRange { index: usize, len: usize },

    #[error("Too many embeds: maximum is {limit}")]
    TooManyEmbeds { limit: usize },

    #[error("Too many fields: maximum is {limit}")]
    TooManyFields { limit: usize },

    #[error("Cannot remove the last remaining embed")]
    LastEmbed,

    #[error("Invalid hex color: {0}")]
    InvalidColor(String),
}
