//! Selection Translator - terminal host
//!
//! Exposes the two translation commands:
//! - `translate to-english`  (Japanese selection → English)
//! - `translate to-japanese` (English selection → Japanese)
//!
//! The selection comes from `--text` or piped stdin; preferences come from
//! `preferences.json` (see `translate config path`) or `GEMINI_API_KEY` /
//! `GEMINI_MODEL`.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod config_commands;
mod terminal;

use cli::{Cli, Commands};
use translator_core::modules::logger::init_logger;
use translator_core::Direction;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logger(&cli.log_level).map_err(|e| anyhow::anyhow!("Failed to init logging: {}", e))?;
    tracing::debug!("translate {} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::ToEnglish(args) => commands::handle_translate(Direction::ToEnglish, args).await,
        Commands::ToJapanese(args) => commands::handle_translate(Direction::ToJapanese, args).await,
        Commands::Config(cmd) => {
            commands::handle_config_command(cmd)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
