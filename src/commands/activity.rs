//! Activity log CLI command

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};

use firmcast_dispatch::SendStatus;
use firmcast_persistence::{Database, SentMessageRepository};

use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct ActivityArgs {
    /// Only show attempts for this webhook id
    #[arg(long, short)]
    pub webhook: Option<String>,

    /// Maximum number of attempts to show
    #[arg(long, short, default_value = "20")]
    pub limit: i64,
}

pub async fn run(args: ActivityArgs, config: &AppConfig) -> Result<()> {
    let db = Database::new(&config.database.path)
        .await
        .context("Failed to open database")?;
    let repo = SentMessageRepository::new(&db);

    let attempts = match &args.webhook {
        Some(webhook_id) => repo.list_for_webhook(webhook_id, args.limit).await?,
        None => repo.recent(args.limit).await?,
    };

    if attempts.is_empty() {
        println!("No send attempts recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("When").add_attribute(Attribute::Bold),
            Cell::new("Webhook").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Error").add_attribute(Attribute::Bold),
        ]);

    for attempt in &attempts {
        let status_color = match attempt.status {
            SendStatus::Sent => Color::Green,
            SendStatus::Failed => Color::Red,
        };

        table.add_row(vec![
            Cell::new(attempt.created_at.format("%Y-%m-%d %H:%M:%S")),
            Cell::new(&attempt.webhook_id),
            Cell::new(attempt.status.to_string()).fg(status_color),
            Cell::new(attempt.error_message.as_deref().unwrap_or("")),
        ]);
    }
    println!("{table}");

    let sent = repo.count_by_status(SendStatus::Sent).await?;
    let failed = repo.count_by_status(SendStatus::Failed).await?;
    println!("Totals: {sent} sent, {failed} failed");

    Ok(())
}
