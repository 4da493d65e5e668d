pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{ChatClient, PromptCaller, SendPromptUseCase, DEFAULT_PROMPT};

pub use connector::{Container, ContainerConfig, MockChatClient, OpenAiChatClient, Router};

pub use domain::{
    ChatMessage, ChatRequest, ChatResponse, Choice, ClientConfig, DomainError, DEFAULT_API_URL,
    DEFAULT_MODEL, MAX_TOKENS,
};
