//! Hangbot entry point.
//!
//! Binary name: `hangbot`
//!
//! Parses CLI arguments, initializes the database and services, then runs
//! the Telegram long-polling loop.

mod dispatch;
mod state;
mod telegram;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[derive(Parser)]
#[command(name = "hangbot", version, about = "Telegram hangman bot")]
struct Cli {
    /// Data directory (defaults to $HANGBOT_DATA_DIR or ~/.hangbot)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,hangbot=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let state = AppState::init(cli.data_dir).await?;
    tracing::info!("bot is running");

    dispatch::run(state).await
}
