//! Preview CLI command

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};

use firmcast_preview::{render, EmbedPreview, MessagePreview};

use super::load_message;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Path to a message document (JSON)
    pub file: PathBuf,

    /// Output format
    #[arg(long, short, default_value = "term")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Discord-style terminal rendering
    Term,
    /// Preview tree as JSON
    Json,
}

pub fn run(args: PreviewArgs) -> Result<()> {
    let message = load_message(&args.file)?;
    let preview = render(&message);

    match args.format {
        OutputFormat::Term => print_terminal(&preview),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&preview)?),
    }

    Ok(())
}

fn print_terminal(preview: &MessagePreview) {
    println!();

    if let Some(content) = &preview.content {
        println!("{content}");
        println!();
    }

    for embed in &preview.embeds {
        print_embed(embed);
        println!();
    }
}

fn print_embed(embed: &EmbedPreview) {
    // The accent bar stands in for Discord's colored left border.
    let bar = format!("┃ [{}]", embed.accent.to_hex());
    println!("{bar}");

    if let Some(author) = &embed.author {
        println!("┃ {}", author.name);
    }
    if let Some(title) = &embed.title {
        println!("┃ {title}");
    }
    if let Some(description) = &embed.description {
        for line in description.lines() {
            println!("┃ {line}");
        }
    }

    for field in &embed.fields {
        let marker = if field.inline { "▸" } else { "▾" };
        println!("┃ {marker} {}", field.name);
        for line in field.value.lines() {
            println!("┃   {line}");
        }
    }

    if let Some(image) = &embed.image_url {
        println!("┃ [image: {image}]");
    }
    if let Some(thumbnail) = &embed.thumbnail_url {
        println!("┃ [thumbnail: {thumbnail}]");
    }
    if let Some(footer) = &embed.footer {
        println!("┃ — {}", footer.text);
    }
}
