//! Webhook management CLI commands

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Args, Subcommand};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};
use uuid::Uuid;

use firmcast_dispatch::is_valid_webhook_url;
use firmcast_persistence::{Database, WebhookRecord, WebhookRepository};

use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct WebhookCommand {
    #[command(subcommand)]
    pub command: WebhookSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum WebhookSubcommand {
    /// Store a new webhook target
    Add(AddArgs),
    /// List stored webhook targets
    List(ListArgs),
    /// Remove a stored webhook target
    Remove(RemoveArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Display name for the webhook
    pub name: String,

    /// Discord webhook URL
    pub url: String,

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
pub struct RemoveArgs {
    /// Webhook id
    pub id: String,
}

pub async fn run(cmd: WebhookCommand, config: &AppConfig) -> Result<()> {
    let db = Database::new(&config.database.path)
        .await
        .context("Failed to open database")?;
    let repo = WebhookRepository::new(&db);

    match cmd.command {
        WebhookSubcommand::Add(args) => {
            if !is_valid_webhook_url(&args.url) {
                bail!(
                    "'{}' is not a Discord webhook URL \
                     (expected https://discord.com/api/webhooks/<id>/<token>)",
                    args.url
                );
            }

            let record = WebhookRecord {
                id: Uuid::new_v4().to_string(),
                firm_id: args.firm,
                name: args.name,
                url: args.url,
                created_at: Utc::now(),
            };
            repo.insert(&record).await?;
            println!("Added webhook {} ({})", record.name, record.id);
        }
        WebhookSubcommand::List(args) => {
            let webhooks = repo.list_for_firm(&args.firm).await?;
            if webhooks.is_empty() {
                println!("No webhooks stored for firm '{}'.", args.firm);
                return Ok(());
            }

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    Cell::new("Id").add_attribute(Attribute::Bold),
                    Cell::new("Name").add_attribute(Attribute::Bold),
                    Cell::new("URL").add_attribute(Attribute::Bold),
                    Cell::new("Created").add_attribute(Attribute::Bold),
                ]);

            for webhook in &webhooks {
                table.add_row(vec![
                    Cell::new(&webhook.id),
                    Cell::new(&webhook.name),
                    Cell::new(&webhook.url),
                    Cell::new(webhook.created_at.format("%Y-%m-%d %H:%M")),
                ]);
            }
            println!("{table}");
        }
        WebhookSubcommand::Remove(args) => {
            repo.delete(&args.id).await?;
            println!("Removed webhook {}", args.id);
        }
    }

    Ok(())
}
