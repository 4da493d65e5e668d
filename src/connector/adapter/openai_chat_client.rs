use std::error::Error as StdError;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Url;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{ChatRequest, ChatResponse, ClientConfig, DomainError};

/// HTTP client for OpenAI-compatible chat completion endpoints.
///
/// Every [`ChatClient::complete`] call issues exactly one `POST` to the
/// configured URL with a JSON [`ChatRequest`] body and a bearer token. There
/// is no retry and no timeout beyond what `reqwest` applies by default.
///
/// Failures map onto [`DomainError`]:
///
/// | Condition                          | Error                   |
/// |------------------------------------|-------------------------|
/// | no HTTP response                   | `Transport`             |
/// | non-2xx status                     | `Protocol`              |
/// | body is not `choices[0].message`   | `MalformedResponse`     |
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: Url,
}

impl OpenAiChatClient {
    pub fn new(config: &ClientConfig) -> Result<Self, DomainError> {
        let url = Url::parse(config.api_url()).map_err(|e| {
            DomainError::invalid_input(format!("invalid endpoint URL {}: {e}", config.api_url()))
        })?;

        Ok(Self {
            client: reqwest::Client::new(),
            api_key: config.api_key().to_string(),
            model: config.model().to_string(),
            url,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.url.as_str()
    }

    fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest::for_prompt(&self.model, prompt)
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let request = self.build_request(prompt);

        debug!("POST {} (model={}, max_tokens={})", self.url, request.model, request.max_tokens);

        let response = self
            .client
            .post(self.url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::transport(error_chain(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("OpenAiChatClient: API returned {status}: {body}");
            return Err(DomainError::protocol(status.as_u16(), status.to_string()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| {
                DomainError::transport(format!("failed to read response body: {}", error_chain(&e)))
            })?;
        debug!("Response: {text}");

        ChatResponse::from_json(&text)?.first_content()
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// `err` followed by every `source()` below it, joined with `": "`.
///
/// reqwest's own `Display` stops at "error sending request for url (...)";
/// the cause (connection refused, DNS failure...) lives further down.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct Layer {
        text: &'static str,
        cause: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.text)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.cause.as_deref().map(|c| c as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn error_chain_includes_every_cause() {
        let err = Layer {
            text: "error sending request for url (http://127.0.0.1:9/)",
            cause: Some(Box::new(Layer {
                text: "client error (Connect)",
                cause: Some(Box::new(Layer {
                    text: "Connection refused (os error 111)",
                    cause: None,
                })),
            })),
        };

        assert_eq!(
            error_chain(&err),
            "error sending request for url (http://127.0.0.1:9/): client error (Connect): \
             Connection refused (os error 111)"
        );
    }

    #[test]
    fn error_chain_skips_causes_already_in_the_message() {
        let err = Layer {
            text: "tcp connect error: Connection refused",
            cause: Some(Box::new(Layer {
                text: "Connection refused",
                cause: None,
            })),
        };

        assert_eq!(error_chain(&err), "tcp connect error: Connection refused");
    }

    #[test]
    fn build_request_uses_configured_model_and_fixed_cap() {
        let config = ClientConfig::new("sk-test").with_model("gpt-4o-mini");
        let client = OpenAiChatClient::new(&config).unwrap();

        let request = client.build_request("hello");

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.max_tokens, 20);
        assert_eq!(request.prompt(), Some("hello"));
    }

    #[test]
    fn rejects_unparsable_endpoint() {
        let config = ClientConfig::new("sk-test").with_api_url("not a url");
        let err = OpenAiChatClient::new(&config).err().unwrap();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn keeps_default_endpoint() {
        let client = OpenAiChatClient::new(&ClientConfig::new("sk-test")).unwrap();
        assert_eq!(client.endpoint(), "https://api.openai.com/v1/chat/completions");
        assert_eq!(client.model_name(), "gpt-3.5-turbo");
    }
}
