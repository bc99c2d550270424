//! Send CLI command

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Args;

use firmcast_dispatch::{Dispatcher, NullSink, WebhookClient, WebhookTarget};
use firmcast_persistence::{Database, SqliteOutcomeSink, WebhookRepository};

use super::load_message;
use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct SendArgs {
    /// Path to a message document (JSON)
    pub file: PathBuf,

    /// Id of a stored webhook target
    #[arg(long, short, conflicts_with = "url", required_unless_present = "url")]
    pub webhook: Option<String>,

    /// Ad-hoc webhook URL (the attempt is not logged)
    #[arg(long)]
    pub url: Option<String>,

    /// Log the payload instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(args: SendArgs, config: &AppConfig) -> Result<()> {
    let message = load_message(&args.file)?;

    let mut client_config = config.client_config();
    if args.dry_run {
        client_config.dry_run = true;
    }
    let client = WebhookClient::new(client_config)?;

    let (target, dispatcher) = match (&args.webhook, &args.url) {
        (Some(id), None) => {
            let db = Database::new(&config.database.path)
                .await
                .context("Failed to open database")?;
            let record = WebhookRepository::new(&db).get(id).await?;
            let sink = Arc::new(SqliteOutcomeSink::new(db));
            (record.as_target(), Dispatcher::new(client, sink))
        }
        (None, Some(url)) => {
            let target = WebhookTarget {
                id: "adhoc".to_string(),
                name: "adhoc".to_string(),
                url: url.clone(),
            };
            (target, Dispatcher::new(client, Arc::new(NullSink)))
        }
        // clap enforces exactly one of --webhook/--url
        _ => unreachable!(),
    };

    let report = dispatcher.send(&message, &target).await?;

    if let Some(sink_error) = &report.sink_error {
        eprintln!("warning: send attempt was not logged: {sink_error}");
    }

    if report.is_sent() {
        println!("Message sent to {}", target.name);
        Ok(())
    } else {
        let reason = report
            .attempt
            .error_message
            .as_deref()
            .unwrap_or("unknown error");
        Err(anyhow!("Send to {} failed: {reason}", target.name))
    }
}
