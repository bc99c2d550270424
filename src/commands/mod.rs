//! CLI subcommands

pub mod activity;
pub mod preview;
pub mod send;
pub mod template;
pub mod webhook;

use anyhow::{Context, Result};
use std::path::Path;

use firmcast_core::Message;

/// Load a message document from a JSON file.
pub fn load_message(path: &Path) -> Result<Message> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read message file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse message file: {}", path.display()))
}
