use clap::Parser;
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands};
use config::RunConfig;

/// Entry point for the `uuidv4` command-line tool.
///
/// Logs go to stderr so stdout carries only results.
///
/// # Environment Variables
/// - `UUIDV4_DEFAULT_COUNT`: how many UUIDs `generate` produces without `-n` (default: 1)
/// - `UUIDV4_UPPERCASE`: render output in uppercase (default: false)
/// - `RUST_LOG`: log filter (default directive: `uuidv4=info`)
///
/// # Returns
/// * `Ok(())` - If the command succeeds
/// * `Err(anyhow::Error)` - If configuration is invalid or the command fails
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("uuidv4=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunConfig::from_env()?;
    tracing::debug!(?config, "resolved configuration");

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Generate { count }) => {
            let count = count.unwrap_or(config.default_count());
            commands::generate(&config, count, &mut out)?;
        }
        Some(Commands::Encode { hex }) => commands::encode_hex(&config, &hex, &mut out)?,
        Some(Commands::Decode { uuid }) => commands::decode_hex(&uuid, &mut out)?,
        Some(Commands::Validate { inputs }) => commands::validate_all(&inputs, &mut out)?,
        None => writeln!(out, "Use 'uuidv4 --help' for commands")?,
    }

    Ok(())
}
