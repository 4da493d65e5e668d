use async_trait::async_trait;

use crate::domain::DomainError;

/// An interface for sending a single prompt to a chat completion service and
/// receiving the reply text.
///
/// Implementors encapsulate transport, serialization and vendor-specific API
/// details. Each call to [`ChatClient::complete`] performs at most one request.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as the sole user message and return the first choice's
    /// content, trimmed.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;

    fn model_name(&self) -> &str;
}
