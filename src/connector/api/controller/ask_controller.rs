use anyhow::Result;

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, prompt: Option<String>) -> Result<String> {
        let caller = self.container.prompt_caller(prompt)?;
        let mut reply = String::new();
        caller.run(|text| reply = text).await?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{DomainError, MockChatClient, DEFAULT_PROMPT};

    #[tokio::test]
    async fn ask_returns_reply_text() {
        let client = Arc::new(MockChatClient::new().with_reply("  Hi there!\n"));
        let container = Container::with_client(client.clone(), None);

        let output = AskController::new(&container)
            .ask(Some("Say hi".to_string()))
            .await
            .unwrap();

        assert_eq!(output, "Hi there!");
        assert_eq!(client.prompts(), vec!["Say hi".to_string()]);
    }

    #[tokio::test]
    async fn ask_without_prompt_uses_default() {
        let client = Arc::new(MockChatClient::new());
        let container = Container::with_client(client.clone(), None);

        AskController::new(&container).ask(None).await.unwrap();

        assert_eq!(client.prompts(), vec![DEFAULT_PROMPT.to_string()]);
    }

    #[tokio::test]
    async fn ask_without_credentials_is_a_configuration_error() {
        let container = Container::new(crate::ContainerConfig {
            mock_chat: false,
            client_config: None,
        })
        .unwrap();

        let err = AskController::new(&container)
            .ask(Some("Say hi".to_string()))
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<DomainError>().unwrap().is_configuration());
    }

    #[tokio::test]
    async fn ask_propagates_failure() {
        let client = Arc::new(MockChatClient::new().with_error(DomainError::protocol(
            429,
            "429 Too Many Requests",
        )));
        let container = Container::with_client(client, None);

        let err = AskController::new(&container)
            .ask(Some("Say hi".to_string()))
            .await
            .unwrap_err();

        let domain = err.downcast_ref::<DomainError>().unwrap();
        assert_eq!(domain.status(), Some(429));
    }
}
