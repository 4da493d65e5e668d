use serde::{Deserialize, Serialize};

use super::ChatMessage;
use crate::domain::DomainError;

/// Chat completion response body. Fields other than `choices` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

impl ChatResponse {
    pub fn from_json(body: &str) -> Result<Self, DomainError> {
        serde_json::from_str(body)
            .map_err(|e| DomainError::malformed(format!("unexpected response body: {e}")))
    }

    /// Content of the first choice with surrounding whitespace trimmed.
    pub fn first_content(&self) -> Result<String, DomainError> {
        self.choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| DomainError::malformed("response contained no choices"))
    }
}
