//! book-radar CLI: run the Telegram bot. Config from env (and `.env`) plus optional CLI args.

use anyhow::Result;
use clap::Parser;
use dbot_cli::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let (telegram, radar) = load_config(token)?;
            run_bot(telegram, radar).await
        }
    }
}
