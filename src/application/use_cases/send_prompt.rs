use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::DomainError;

pub struct SendPromptUseCase {
    client: Arc<dyn ChatClient>,
}

impl SendPromptUseCase {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    /// Send `prompt` and return the trimmed reply.
    ///
    /// A failure is not logged here; it is returned so the caller reports it.
    pub async fn execute(&self, prompt: &str) -> Result<String, DomainError> {
        if prompt.is_empty() {
            warn!("Sending an empty prompt to {}", self.client.model_name());
        }
        debug!(
            "Sending prompt ({} chars) to {}",
            prompt.chars().count(),
            self.client.model_name()
        );

        self.client.complete(prompt).await
    }

    /// Callback form of [`Self::execute`]: `on_result` runs only on success.
    pub async fn send<F>(&self, prompt: &str, on_result: F) -> Result<(), DomainError>
    where
        F: FnOnce(String),
    {
        let text = self.execute(prompt).await?;
        on_result(text);
        Ok(())
    }
}
