//! CLI parser and config loading.

use anyhow::Result;
use book_radar::RadarConfig;
use clap::{Parser, Subcommand};
use dbot_telegram::TelegramConfig;

#[derive(Parser)]
#[command(name = "book-radar")]
#[command(about = "Book recommendation Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Loads transport and bot config from env. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<(TelegramConfig, RadarConfig)> {
    let telegram = TelegramConfig::load(token)?;
    let radar = RadarConfig::from_env()?;
    Ok((telegram, radar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["book-radar", "run", "--token", "abc"]).unwrap();
        match cli.command {
            Commands::Run { token } => assert_eq!(token.as_deref(), Some("abc")),
        }
    }

    #[test]
    fn test_parse_run_without_token() {
        let cli = Cli::try_parse_from(["book-radar", "run"]).unwrap();
        match cli.command {
            Commands::Run { token } => assert!(token.is_none()),
        }
    }

    /// **Test: load_config picks up the CLI token and the provider timeout from env.**
    #[test]
    #[serial]
    fn test_load_config_with_token_override() {
        std::env::remove_var("TELEGRAM_API_URL");
        std::env::remove_var("TELOXIDE_API_URL");
        std::env::set_var("PROVIDER_TIMEOUT_SECS", "12");

        let (telegram, radar) = load_config(Some("cli_token".to_string())).unwrap();

        assert_eq!(telegram.bot_token, "cli_token");
        assert_eq!(radar.provider_timeout_secs, 12);
        std::env::remove_var("PROVIDER_TIMEOUT_SECS");
    }
}
