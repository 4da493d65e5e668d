use std::sync::Arc;

use tracing::info;

use crate::application::{ChatClient, SendPromptUseCase};
use crate::domain::DomainError;

/// Prompt used when the driver is not given one.
pub const DEFAULT_PROMPT: &str = "Say hi";

/// One-shot driver: holds a prompt and fires it exactly once.
///
/// `run` consumes the caller, so a given `PromptCaller` can never issue a
/// second request.
pub struct PromptCaller {
    use_case: SendPromptUseCase,
    prompt: String,
}

impl PromptCaller {
    pub fn new(client: Arc<dyn ChatClient>, prompt: impl Into<String>) -> Self {
        Self {
            use_case: SendPromptUseCase::new(client),
            prompt: prompt.into(),
        }
    }

    pub fn with_default_prompt(client: Arc<dyn ChatClient>) -> Self {
        Self::new(client, DEFAULT_PROMPT)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub async fn run<F>(self, on_result: F) -> Result<(), DomainError>
    where
        F: FnOnce(String),
    {
        self.use_case
            .send(&self.prompt, |response| {
                info!("Chat response: {response}");
                on_result(response);
            })
            .await
    }
}
