use std::sync::Arc;

use symptom_core::{Clock, Language, translate};

use crate::gateway::ChatGateway;

/// Free-form chat against the stateless completion endpoint.
#[derive(Clone)]
pub struct ChatService {
    gateway: Arc<dyn ChatGateway>,
    clock: Clock,
}

impl ChatService {
    #[must_use]
    pub fn new(gateway: Arc<dyn ChatGateway>, clock: Clock) -> Self {
        Self { gateway, clock }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Text to show as the bot's reply. Never fails.
    pub async fn reply(&self, message: &str, language: Language) -> String {
        match self.gateway.complete(message, language).await {
            Ok(reply) => reply
                .into_text()
                .unwrap_or_else(|| translate(language, "chat.no_reply").to_string()),
            Err(err) => {
                tracing::warn!(error = %err, "chat request failed");
                translate(language, "chat.connection_error").to_string()
            }
        }
    }
}
