//! Dispatcher: converts teloxide messages and callback queries to core events and hands them to the
//! HandlerChain. Updates from one chat are processed in arrival order.

use anyhow::Result;
use dbot_core::{Bot as CoreBot, Event, ToCoreCallback, ToCoreMessage};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use super::bot_adapter::TelegramBotAdapter;
use super::config::TelegramConfig;

/// Creates the teloxide Bot from config, pointing it at a custom API server when one is set.
pub fn build_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(&config.bot_token);
    match &config.telegram_api_url {
        Some(url) => {
            let url = reqwest::Url::parse(url)?;
            info!(api_url = %url, "Using custom Telegram API URL");
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Runs the dispatcher until Ctrl-C. Messages and callback queries both go through `handler_chain`.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Bot identity resolved");
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    debug!(message_id = %core_msg.id, "Dispatching message");
    process(&chain, Event::Message(core_msg)).await;
    Ok(())
}

async fn on_callback(
    bot: teloxide::Bot,
    query: CallbackQuery,
    chain: HandlerChain,
) -> ResponseResult<()> {
    match TelegramCallbackWrapper(&query).to_core() {
        Some(core_query) => {
            debug!(callback_id = %core_query.id, "Dispatching callback");
            process(&chain, Event::Callback(core_query)).await;
        }
        None => {
            let adapter = TelegramBotAdapter::new(bot);
            acknowledge_without_data(&adapter, &query.id.to_string()).await;
        }
    }
    Ok(())
}

/// Presses without payload never reach the chain but still get an empty answer so the client
/// stops waiting.
async fn acknowledge_without_data(bot: &dyn CoreBot, callback_id: &str) {
    debug!(callback_id, "Callback without data, acknowledged");
    if let Err(e) = bot.answer_callback(callback_id, None).await {
        error!(error = %e, callback_id, "Failed to answer callback without data");
    }
}

async fn process(chain: &HandlerChain, event: Event) {
    if let Err(e) = chain.handle(&event).await {
        error!(error = %e, user_id = event.user().id, kind = event.kind(), "Handler chain failed");
    }
}
