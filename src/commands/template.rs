//! Template management CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Subcommand};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};
use uuid::Uuid;

use firmcast_persistence::{Database, TemplateRecord, TemplateRepository};

use super::load_message;
use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct TemplateCommand {
    #[command(subcommand)]
    pub command: TemplateSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum TemplateSubcommand {
    /// Save a message document as a reusable template
    Save(SaveArgs),
    /// List stored templates
    List(ListArgs),
    /// Write a template's message document to stdout
    Show(ShowArgs),
    /// Copy an existing template under a new name
    Duplicate(DuplicateArgs),
    /// Mark a template as the firm's default
    SetDefault(SetDefaultArgs),
    /// Remove a template
    Remove(RemoveArgs),
}

#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Template name
    pub name: String,

    /// Path to a message document (JSON)
    pub file: PathBuf,

    /// Owning firm
    #[arg(long, default_value = "default")]
    pub firm: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Owning firm
    #[arg(long, default_value = "default")]
    pub firm: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Template id
    pub id: String,
}

#[derive(Debug, Args)]
pub struct DuplicateArgs {
    /// Source template id
    pub id: String,

    /// Name for the copy
    pub new_name: String,
}

#[derive(Debug, Args)]
pub struct SetDefaultArgs {
    /// Template id
    pub id: String,

    /// Owning firm
    #[arg(long, default_value = "default")]
    pub firm: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Template id
    pub id: String,
}

pub async fn run(cmd: TemplateCommand, config: &AppConfig) -> Result<()> {
    let db = Database::new(&config.database.path)
        .await
        .context("Failed to open database")?;
    let repo = TemplateRepository::new(&db);

    match cmd.command {
        TemplateSubcommand::Save(args) => {
            // Parse through Message so malformed documents are rejected
            // at save time, not at send time.
            let message = load_message(&args.file)?;

            let record = TemplateRecord {
                id: Uuid::new_v4().to_string(),
                firm_id: args.firm,
                name: args.name,
                content: serde_json::to_value(&message)?,
                is_default: false,
                created_at: Utc::now(),
            };
            repo.insert(&record).await?;
            println!("Saved template {} ({})", record.name, record.id);
        }
        TemplateSubcommand::List(args) => {
            let templates = repo.list_for_firm(&args.firm).await?;
            if templates.is_empty() {
                println!("No templates stored for firm '{}'.", args.firm);
                return Ok(());
            }

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    Cell::new("Id").add_attribute(Attribute::Bold),
                    Cell::new("Name").add_attribute(Attribute::Bold),
                    Cell::new("Default").add_attribute(Attribute::Bold),
                    Cell::new("Created").add_attribute(Attribute::Bold),
                ]);

            for template in &templates {
                table.add_row(vec![
                    Cell::new(&template.id),
                    Cell::new(&template.name),
                    Cell::new(if template.is_default { "yes" } else { "" }),
                    Cell::new(template.created_at.format("%Y-%m-%d %H:%M")),
                ]);
            }
            println!("{table}");
        }
        TemplateSubcommand::Show(args) => {
            let template = repo.get(&args.id).await?;
            println!("{}", serde_json::to_string_pretty(&template.content)?);
        }
        TemplateSubcommand::Duplicate(args) => {
            let copy = repo.duplicate(&args.id, &args.new_name).await?;
            println!("Duplicated template as {} ({})", copy.name, copy.id);
        }
        TemplateSubcommand::SetDefault(args) => {
            repo.set_default(&args.firm, &args.id).await?;
            println!("Template {} is now the default", args.id);
        }
        TemplateSubcommand::Remove(args) => {
            repo.delete(&args.id).await?;
            println!("Removed template {}", args.id);
        }
    }

    Ok(())
}
