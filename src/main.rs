//! Bot Commands - Entry Point
//!
//! Reads a comment body from a file or stdin, finds every `bot: ` directive
//! in it and prints the parsed commands in canonical form.

use bot_commands::command::report;
use bot_commands::core::config::{self, BotConfig};
use bot_commands::core::error::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

/// Parse build-bot directives from comment text
#[derive(Parser, Debug)]
#[command(name = "bot-commands")]
#[command(about = "Detect and parse bot directives in a comment body")]
struct Args {
    /// File holding the comment body (stdin when omitted)
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let bot_config = match &args.config {
        Some(path) => BotConfig::load_from_toml(path)?,
        None => BotConfig::default(),
    };

    // RUST_LOG wins over the configured filter
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => bot_config.env_filter()?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if config::set_config(bot_config).is_err() {
        tracing::warn!("bot config was already initialized");
    }

    let body = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            body
        }
    };

    let report = report(&body, config::config());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.render_text() {
            println!("{}", line);
        }
    }

    if report.any_failed() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
