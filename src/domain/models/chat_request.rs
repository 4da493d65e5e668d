use serde::{Deserialize, Serialize};

/// Completion cap applied to every outgoing request.
pub const MAX_TOKENS: u32 = 20;

pub const USER_ROLE: &str = "user";

/// A single chat message, used both in requests and in response choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(USER_ROLE, content)
    }
}

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

impl ChatRequest {
    /// Build the one-message request sent for `prompt`.
    ///
    /// The prompt is stored verbatim; no trimming or escaping happens here,
    /// serde takes care of JSON encoding.
    pub fn for_prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: MAX_TOKENS,
        }
    }

    pub fn prompt(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn serializes_to_the_chat_completion_shape() {
        let request = ChatRequest::for_prompt("gpt-3.5-turbo", "Say hi");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "Say hi"}],
                "max_tokens": 20
            })
        );
    }

    #[test]
    fn prompt_survives_serialization_unchanged() {
        let prompts = [
            "",
            "   padded   ",
            "quotes \" and \\ backslashes",
            "line one\nline two\ttabbed",
            "unicode: こんにちは 🎮 ü",
            "{\"looks\": \"like json\"}",
        ];

        for prompt in prompts {
            let body = serde_json::to_string(&ChatRequest::for_prompt("m", prompt)).unwrap();
            let value: Value = serde_json::from_str(&body).unwrap();
            assert_eq!(value["messages"][0]["content"], prompt);
            assert_eq!(value["messages"].as_array().unwrap().len(), 1);
        }
    }

    #[test]
    fn max_tokens_is_fixed_regardless_of_prompt() {
        let long = "x".repeat(10_000);
        for prompt in ["", "short", long.as_str()] {
            let request = ChatRequest::for_prompt("some-model", prompt);
            assert_eq!(request.max_tokens, MAX_TOKENS);
            assert_eq!(request.model, "some-model");
            assert_eq!(request.prompt(), Some(prompt));
        }
    }
}
