use anyhow::Result;

use crate::ClientConfig;

use super::super::Container;

pub struct ConfigController<'a> {
    container: &'a Container,
}

impl<'a> ConfigController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn show(&self) -> Result<String> {
        Ok(self.format_config(self.container.client_config()))
    }

    fn format_config(&self, config: Option<&ClientConfig>) -> String {
        let mut output = String::from("ChatPrompt Configuration\n========================\n");

        match config {
            Some(config) => {
                output.push_str(&format!(
                    "Endpoint: {}\nModel:    {}\nAPI Key:  {}",
                    config.api_url(),
                    config.model(),
                    config.redacted_key()
                ));
            }
            None => output.push_str("Endpoint: (not configured)\nAPI Key:  (not set)"),
        }

        if self.container.is_mock() {
            output.push_str("\nClient:   mock (no network calls)");
        }

        output
    }
}
