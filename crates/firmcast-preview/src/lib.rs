//! Firmcast Preview
//!
//! Deterministic, side-effect-free rendering of a message into a
//! display-ready tree that approximates how Discord lays out embeds.

mod render;

pub use render::{
    render, AuthorBlock, EmbedPreview, FieldBlock, FooterBlock, MessagePreview,
};
