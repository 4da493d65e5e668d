//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion over HTTP (OpenAI-compatible endpoints)
//! - An offline mock client
//! - The CLI composition root (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
