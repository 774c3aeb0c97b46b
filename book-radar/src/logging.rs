//! Logs each inbound event in before() and the response in after(); always continues.

use async_trait::async_trait;
use dbot_core::{Event, Handler, HandlerResponse, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        let user = event.user();
        let username = user.username.as_deref().unwrap_or("unknown");
        match event {
            Event::Message(message) => info!(
                user_id = user.id,
                username = %username,
                message_content = %message.content,
                "Received message"
            ),
            Event::Callback(query) => info!(
                user_id = user.id,
                username = %username,
                payload = %query.data,
                "Received callback"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &Event, response: &HandlerResponse) -> Result<()> {
        debug!(
            user_id = event.user().id,
            kind = event.kind(),
            response = ?response,
            "Processed event"
        );
        Ok(())
    }
}
