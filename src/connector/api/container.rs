use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::{ChatClient, ClientConfig, DomainError, MockChatClient, OpenAiChatClient, PromptCaller};

pub struct ContainerConfig {
    /// Use [`MockChatClient`] instead of calling the endpoint.
    pub mock_chat: bool,
    /// Resolved credentials. `None` when `OPENAI_API_KEY` is not set.
    pub client_config: Option<ClientConfig>,
}

pub struct Container {
    /// Absent when neither credentials nor `mock_chat` were provided; only
    /// commands that send a prompt need it.
    chat_client: Option<Arc<dyn ChatClient>>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let chat_client: Option<Arc<dyn ChatClient>> = if config.mock_chat {
            debug!("Using mock chat client");
            Some(Arc::new(MockChatClient::new()))
        } else if let Some(client_config) = config.client_config.as_ref() {
            debug!("Using chat endpoint {:?}", client_config);
            Some(Arc::new(OpenAiChatClient::new(client_config)?))
        } else {
            debug!("No chat client configured");
            None
        };

        Ok(Self {
            chat_client,
            config,
        })
    }

    /// Build a container around an existing client, bypassing configuration.
    pub fn with_client(chat_client: Arc<dyn ChatClient>, client_config: Option<ClientConfig>) -> Self {
        Self {
            chat_client: Some(chat_client),
            config: ContainerConfig {
                mock_chat: false,
                client_config,
            },
        }
    }

    pub fn chat_client(&self) -> Result<Arc<dyn ChatClient>, DomainError> {
        self.chat_client.clone().ok_or_else(|| {
            DomainError::configuration("OPENAI_API_KEY is not set (use --mock to run offline)")
        })
    }

    pub fn prompt_caller(&self, prompt: Option<String>) -> Result<PromptCaller, DomainError> {
        let client = self.chat_client()?;
        Ok(match prompt {
            Some(prompt) => PromptCaller::new(client, prompt),
            None => PromptCaller::with_default_prompt(client),
        })
    }

    pub fn client_config(&self) -> Option<&ClientConfig> {
        self.config.client_config.as_ref()
    }

    pub fn is_mock(&self) -> bool {
        self.config.mock_chat
    }
}
