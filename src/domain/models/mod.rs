mod chat_request;
mod chat_response;
mod client_config;

pub use chat_request::*;
pub use chat_response::*;
pub use client_config::*;
