//! Firmcast - Discord webhook message composer and dispatcher
//!
//! CLI for PR firms managing Discord webhook integrations: preview
//! rich embed messages, dispatch them to stored webhooks, and review
//! the send-attempt log.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use firmcast_observability::{init_logging, LogFormat};

mod commands;
mod config;

use commands::{activity, preview, send, template, webhook};
use config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "firmcast", version, about = "Discord webhook message composer and dispatcher")]
struct Cli {
    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a message document as a Discord-style preview
    Preview(preview::PreviewArgs),

    /// Send a message document to a webhook
    Send(send::SendArgs),

    /// Manage stored webhook targets
    Webhook(webhook::WebhookCommand),

    /// Manage reusable embed templates
    Template(template::TemplateCommand),

    /// Show recent send attempts
    Activity(activity::ActivityArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LogFormat::Compact, cli.log_level);

    let config = AppConfig::load()?;

    match cli.command {
        Command::Preview(args) => preview::run(args),
        Command::Send(args) => send::run(args, &config).await,
        Command::Webhook(cmd) => webhook::run(cmd, &config).await,
        Command::Template(cmd) => template::run(cmd, &config).await,
        Command::Activity(args) => activity::run(args, &config).await,
    }
}
