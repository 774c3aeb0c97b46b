//! Wires logging, the book-radar handler and the Telegram dispatcher together.

use std::sync::Arc;

use anyhow::Result;
use book_radar::{BookProvider, BookRadar, LoggingHandler, RadarConfig, StubBookProvider};
use dbot_core::init_tracing;
use dbot_telegram::{build_bot, run_dispatcher, TelegramBotAdapter, TelegramConfig};
use handler_chain::HandlerChain;
use tracing::{info, instrument};

/// Builds the handler chain: request logging first, then the bot itself.
pub fn build_handler_chain(
    bot: Arc<dyn dbot_core::Bot>,
    provider: Arc<dyn BookProvider>,
    config: &RadarConfig,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(BookRadar::new(bot, provider, config)))
}

/// Initializes tracing, connects to Telegram and runs until Ctrl-C.
#[instrument(skip_all)]
pub async fn run_bot(telegram: TelegramConfig, radar: RadarConfig) -> Result<()> {
    init_tracing(&telegram.log_file)?;
    info!(
        log_file = %telegram.log_file,
        provider_timeout_secs = radar.provider_timeout_secs,
        "Initializing bot"
    );

    let teloxide_bot = build_bot(&telegram)?;
    let bot: Arc<dyn dbot_core::Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let provider: Arc<dyn BookProvider> = Arc::new(StubBookProvider::new());
    let chain = build_handler_chain(bot, provider, &radar);

    info!(handlers = chain.len(), "Bot started successfully");
    run_dispatcher(teloxide_bot, chain).await
}
