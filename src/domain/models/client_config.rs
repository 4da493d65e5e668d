use std::fmt;

use crate::domain::DomainError;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const API_URL_VAR: &str = "OPENAI_API_URL";
pub const MODEL_VAR: &str = "OPENAI_MODEL";

/// Credentials and endpoint for the chat completion service.
///
/// Values are supplied from outside the binary:
///
/// | Variable         | Default                                      |
/// |------------------|----------------------------------------------|
/// | `OPENAI_API_KEY` | required                                     |
/// | `OPENAI_API_URL` | `https://api.openai.com/v1/chat/completions` |
/// | `OPENAI_MODEL`   | `gpt-3.5-turbo`                              |
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    api_url: String,
    model: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_VAR)
            .ok_or_else(|| DomainError::configuration(format!("{API_KEY_VAR} is not set")))?;

        let mut config = Self::new(api_key);
        if let Some(url) = get(API_URL_VAR) {
            config = config.with_api_url(url);
        }
        if let Some(model) = get(MODEL_VAR) {
            config = config.with_model(model);
        }
        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The key with everything but its last four characters masked.
    pub fn redacted_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), tail)
    }
}

// Keeps the key out of `{:?}` output and therefore out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.redacted_key())
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}
