use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ChatClient;
use crate::domain::DomainError;

/// Offline [`ChatClient`] that never touches the network.
///
/// Without a configured outcome it echoes the prompt back. Every prompt it
/// receives is recorded so callers can assert on what was sent.
pub struct MockChatClient {
    outcome: Option<Result<String, DomainError>>,
    prompts: Mutex<Vec<String>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            outcome: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.outcome = Some(Ok(reply.into()));
        self
    }

    pub fn with_error(mut self, error: DomainError) -> Self {
        self.outcome = Some(Err(error));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.outcome {
            Some(Ok(reply)) => Ok(reply.trim().to_string()),
            Some(Err(e)) => Err(e.clone()),
            None => Ok(format!("(mock) {}", prompt.trim())),
        }
    }

    fn model_name(&self) -> &str {
        "mock-chat"
    }
}
